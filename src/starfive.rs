//! StarFive JH7110 DWMAC glue.
//!
//! The JH7110 muxes the MAC to PHY interface through a field in the SYS syscon,
//! selected by the `starfive,syscon = <&syscon REG MASK>` property. The RGMII TX
//! clock is generated internally and must follow the link speed, unless the board
//! routes the external RGMII RX clock to it (`starfive,tx-use-rgmii-clk`).

use crate::clk::Clk;
use crate::device::Device;
use crate::error::Error;
use crate::of::{self, DeviceNode, OfDeviceId};
use crate::phy::{PhyInterfaceMode, Speed};
use crate::regmap::SysconField;
use crate::stmmac::{FixMacSpeed, ProbeFailure, Stmmac};

/// `phy_intf_sel` value for RMII.
pub const MACPHYC_PHY_INFT_RMII: u32 = 0x4;
/// `phy_intf_sel` value for RGMII.
pub const MACPHYC_PHY_INFT_RGMII: u32 = 0x1;

/// Syscon phandle with register offset and mask cells.
pub const PROP_SYSCON: &str = "starfive,syscon";
/// TX clock is taken from the RGMII RX clock input.
pub const PROP_TX_USE_RGMII_CLK: &str = "starfive,tx-use-rgmii-clk";

/// RGMII/RMII transmit clock.
pub const CLK_TX: &str = "tx";
/// Gigabit transmit clock.
pub const CLK_GTX: &str = "gtx";

/// Per-device glue context, owned by the MAC core once probed.
#[derive(Debug)]
pub struct StarfiveDwmac<C> {
    clk_tx: C,
    clk_gtx: C,
    tx_use_rgmii_clk: bool,
}

impl<C: Clk> StarfiveDwmac<C> {
    /// Context over enabled `tx` and `gtx` clocks.
    pub fn new(clk_tx: C, clk_gtx: C, tx_use_rgmii_clk: bool) -> Self {
        Self {
            clk_tx,
            clk_gtx,
            tx_use_rgmii_clk,
        }
    }

    /// The `tx` clock.
    pub fn clk_tx(&self) -> &C {
        &self.clk_tx
    }

    /// The `gtx` clock.
    pub fn clk_gtx(&self) -> &C {
        &self.clk_gtx
    }

    /// Whether the TX clock follows the external RGMII RX clock.
    pub fn tx_use_rgmii_clk(&self) -> bool {
        self.tx_use_rgmii_clk
    }
}

/// TX clock rate for a link speed, if the MAC supports that speed.
pub fn tx_clk_rate(speed: Speed) -> Option<u32> {
    match speed {
        Speed::_1000 => Some(125_000_000),
        Speed::_100 => Some(25_000_000),
        Speed::_10 => Some(2_500_000),
        _ => None,
    }
}

impl<C: Clk> FixMacSpeed for StarfiveDwmac<C> {
    fn fix_mac_speed(&mut self, speed: u32) {
        // rgmii_rxin adapts to the link on its own
        if self.tx_use_rgmii_clk {
            return;
        }

        let Some(rate) = Speed::from_mbps(speed).and_then(tx_clk_rate) else {
            error!("invalid speed {}", speed);
            return;
        };

        if self.clk_tx.set_rate(rate).is_err() {
            error!("failed to set tx rate {}", rate);
        }
    }
}

/// Map an interface mode to the syscon `phy_intf_sel` value.
pub fn phy_intf_sel(interface: PhyInterfaceMode) -> Result<u32, Error> {
    match interface {
        PhyInterfaceMode::Rmii => Ok(MACPHYC_PHY_INFT_RMII),
        PhyInterfaceMode::Rgmii | PhyInterfaceMode::RgmiiId => Ok(MACPHYC_PHY_INFT_RGMII),
        _ => {
            error!("Unsupported interface {:?}", interface);
            Err(Error::UnsupportedInterface(interface))
        }
    }
}

/// Program the interface mux for `interface`.
///
/// Nothing is written unless the mode is supported and the syscon field resolves.
pub fn set_mode<D: Device>(dev: &D, interface: PhyInterfaceMode) -> Result<(), Error> {
    let mode = phy_intf_sel(interface)?;

    let args = dev
        .of_node()
        .ok_or(Error::InvalidArgument)
        .and_then(|np| np.parse_phandle_with_fixed_args(PROP_SYSCON, 2, 0))
        .map_err(|_| {
            debug!("syscon reg not found");
            Error::InvalidArgument
        })?;

    let [reg, mask] = *args.args.as_slice() else {
        return Err(Error::InvalidArgument);
    };
    let field = SysconField { reg, mask };
    let mut regmap = dev.syscon_node_to_regmap(&args.np)?;
    trace!("{}: phy_intf_sel {} at {:#x} mask {:#x}", args.np.full_name(), mode, reg, mask);
    drop(args);

    field.update(&mut regmap, mode)
}

fn clk_get<D: Device>(dev: &D, id: &'static str) -> Result<D::Clk, Error> {
    dev.clk_get_enabled(id).map_err(|err| {
        if err == Error::ProbeDefer {
            debug!("error getting {} clock: deferred", id);
        } else {
            error!("error getting {} clock: {:?}", id, err);
        }
        err
    })
}

/// The `starfive-dwmac` platform driver.
pub struct DwmacStarfiveDriver;

impl DwmacStarfiveDriver {
    /// Driver name.
    pub const NAME: &'static str = "starfive-dwmac";

    /// Device tree match table.
    pub const OF_MATCH_TABLE: &'static [OfDeviceId] = &[OfDeviceId {
        compatible: "starfive,jh7110-dwmac",
    }];

    /// Whether this driver binds to `node`.
    pub fn matches<N: DeviceNode>(node: &N) -> bool {
        of::match_node(Self::OF_MATCH_TABLE, node).is_some()
    }

    /// Bind to `dev` and hand the MAC over to the core.
    pub fn probe<D, S>(dev: &D, stmmac: &mut S) -> Result<(), Error>
    where
        D: Device,
        S: Stmmac<D, StarfiveDwmac<D::Clk>>,
    {
        let res = stmmac.get_platform_resources(dev)?;

        let mut plat = stmmac.probe_config_dt(dev, res.mac.as_ref()).map_err(|err| {
            error!("dt configuration failed");
            err
        })?;

        let clks = clk_get(dev, CLK_TX).and_then(|tx| Ok((tx, clk_get(dev, CLK_GTX)?)));
        let (clk_tx, clk_gtx) = match clks {
            Ok(clks) => clks,
            Err(err) => {
                stmmac.remove_config_dt(dev, plat);
                return Err(err);
            }
        };
        let tx_use_rgmii_clk = dev.property_read_bool(PROP_TX_USE_RGMII_CLK);

        plat.init = None;
        plat.bsp_priv = Some(StarfiveDwmac::new(clk_tx, clk_gtx, tx_use_rgmii_clk));
        plat.dma_cfg.dche = true;

        debug!("interface {:?}, tx clock from rgmii rxin: {}", plat.interface, tx_use_rgmii_clk);
        if let Err(err) = set_mode(dev, plat.interface) {
            stmmac.remove_config_dt(dev, plat);
            return Err(err);
        }

        if let Err(ProbeFailure { error, plat }) = stmmac.dvr_probe(dev, plat, res) {
            stmmac.remove_config_dt(dev, plat);
            return Err(error);
        }

        Ok(())
    }

    /// Unbind from `dev`.
    pub fn remove<D, S>(dev: &D, stmmac: &mut S)
    where
        D: Device,
        S: Stmmac<D, StarfiveDwmac<D::Clk>>,
    {
        stmmac.pltfr_remove(dev);
    }

    /// System suspend.
    pub fn suspend<D, S>(dev: &D, stmmac: &mut S) -> Result<(), Error>
    where
        D: Device,
        S: Stmmac<D, StarfiveDwmac<D::Clk>>,
    {
        stmmac.pltfr_suspend(dev)
    }

    /// System resume.
    pub fn resume<D, S>(dev: &D, stmmac: &mut S) -> Result<(), Error>
    where
        D: Device,
        S: Stmmac<D, StarfiveDwmac<D::Clk>>,
    {
        stmmac.pltfr_resume(dev)
    }
}
