//! Contract with the shared DesignWare MAC core driver.
//!
//! The core owns packet processing, DMA and network stack integration. A glue
//! driver fetches the platform data from it, adjusts the SoC specific bits,
//! installs its private context and hands everything back through [`Stmmac::dvr_probe`].

use crate::device::Device;
use crate::error::Error;
use crate::phy::PhyInterfaceMode;

/// Callback the core invokes when the negotiated link speed changes.
pub trait FixMacSpeed {
    /// `speed` is in Mbit/s, as the PHY library reports it.
    fn fix_mac_speed(&mut self, speed: u32);
}

/// DMA engine configuration.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DmaCfg {
    /// Programmable burst length
    pub pbl: u32,
    /// Fixed burst
    pub fixed_burst: bool,
    /// Mixed burst
    pub mixed_burst: bool,
    /// Address-aligned beats
    pub aal: bool,
    /// Descriptor cache enable
    pub dche: bool,
}

/// Platform data shared between the core and a glue driver.
pub struct PlatData<G> {
    /// Interface between MAC and PHY
    pub interface: PhyInterfaceMode,
    /// Interface between PHY and the wire side
    pub phy_interface: PhyInterfaceMode,
    /// DMA configuration
    pub dma_cfg: DmaCfg,
    /// Hook run by the core on open and resume.
    pub init: Option<fn(&mut G) -> Result<(), Error>>,
    /// Glue driver private context.
    pub bsp_priv: Option<G>,
}

impl<G> PlatData<G> {
    /// Platform data for `interface`, with no glue context installed.
    pub fn new(interface: PhyInterfaceMode) -> Self {
        Self {
            interface,
            phy_interface: interface,
            dma_cfg: DmaCfg::default(),
            init: None,
            bsp_priv: None,
        }
    }

    /// Run the init hook, if both the hook and a context are installed.
    pub fn run_init(&mut self) -> Result<(), Error> {
        match (self.init, self.bsp_priv.as_mut()) {
            (Some(init), Some(bsp)) => init(bsp),
            _ => Ok(()),
        }
    }
}

impl<G: FixMacSpeed> PlatData<G> {
    /// Forward a link speed change to the glue driver.
    pub fn fix_mac_speed(&mut self, speed: u32) {
        if let Some(bsp) = self.bsp_priv.as_mut() {
            bsp.fix_mac_speed(speed);
        }
    }
}

/// Memory and interrupt resources of the MAC.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct StmmacResources {
    /// Register base
    pub addr: usize,
    /// Main interrupt line
    pub irq: i32,
    /// Wake-on-LAN interrupt line
    pub wol_irq: Option<i32>,
    /// Low power idle interrupt line
    pub lpi_irq: Option<i32>,
    /// MAC address from the device tree
    pub mac: Option<[u8; 6]>,
}

/// A failed [`Stmmac::dvr_probe`], handing the platform data back for cleanup.
pub struct ProbeFailure<G> {
    /// Why the probe failed
    pub error: Error,
    /// Platform data passed to the probe
    pub plat: PlatData<G>,
}

/// Entry points of the MAC core used by glue drivers.
pub trait Stmmac<D: Device, G> {
    /// Collect the register window and interrupts.
    fn get_platform_resources(&mut self, dev: &D) -> Result<StmmacResources, Error>;

    /// Build platform data from the generic device tree bindings.
    fn probe_config_dt(&mut self, dev: &D, mac: Option<&[u8; 6]>) -> Result<PlatData<G>, Error>;

    /// Release what [`Stmmac::probe_config_dt`] acquired.
    fn remove_config_dt(&mut self, dev: &D, plat: PlatData<G>);

    /// Bring up the MAC. On success the core owns `plat` until removal.
    fn dvr_probe(&mut self, dev: &D, plat: PlatData<G>, res: StmmacResources) -> Result<(), ProbeFailure<G>>;

    /// Tear down a MAC brought up by [`Stmmac::dvr_probe`].
    fn pltfr_remove(&mut self, dev: &D);

    /// System suspend.
    fn pltfr_suspend(&mut self, dev: &D) -> Result<(), Error>;

    /// System resume.
    fn pltfr_resume(&mut self, dev: &D) -> Result<(), Error>;
}
