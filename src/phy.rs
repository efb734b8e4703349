//! PHY interface modes and link speeds.

use core::str::FromStr;

use crate::error::Error;

/// Link Speed
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 MBit
    _10,
    /// 100 MBit
    _100,
    /// 1000 MBit
    _1000,
    /// 2500 MBit
    _2500,
    /// 5000 MBit
    _5000,
    /// 10000 MBit
    _10000,
}

impl Speed {
    /// Speed from the Mbit/s value reported by the MAC core.
    pub fn from_mbps(mbps: u32) -> Option<Self> {
        match mbps {
            10 => Some(Speed::_10),
            100 => Some(Speed::_100),
            1000 => Some(Speed::_1000),
            2500 => Some(Speed::_2500),
            5000 => Some(Speed::_5000),
            10000 => Some(Speed::_10000),
            _ => None,
        }
    }

    /// Speed in Mbit/s.
    pub fn mbps(self) -> u32 {
        match self {
            Speed::_10 => 10,
            Speed::_100 => 100,
            Speed::_1000 => 1000,
            Speed::_2500 => 2500,
            Speed::_5000 => 5000,
            Speed::_10000 => 10000,
        }
    }
}

/// MAC to PHY connection type, as named by the device tree `phy-mode` property.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterfaceMode {
    /// Interface mode not given
    Na,
    /// Internal PHY
    Internal,
    /// Media-independent interface
    Mii,
    /// Gigabit MII
    Gmii,
    /// Serial gigabit MII
    Sgmii,
    /// Ten-bit interface
    Tbi,
    /// Reduced MII
    Rmii,
    /// Reduced gigabit MII, no internal delays
    Rgmii,
    /// RGMII with internal RX and TX delays
    RgmiiId,
    /// RGMII with internal RX delay
    RgmiiRxid,
    /// RGMII with internal TX delay
    RgmiiTxid,
    /// Reduced TBI
    Rtbi,
    /// Serial MII
    Smii,
    /// 10 gigabit MII
    Xgmii,
    /// Multimedia over Coax
    Moca,
    /// Quad SGMII
    Qsgmii,
    /// Turbo RGMII
    Trgmii,
    /// 1000BASE-X
    _1000BaseX,
    /// 2500BASE-X
    _2500BaseX,
    /// Reduced XAUI
    Rxaui,
    /// 10 gigabit attachment unit interface
    Xaui,
    /// 10GBASE-KR
    _10GBaseKr,
    /// Universal serial 10GE MII
    Usxgmii,
}

const MODES: &[PhyInterfaceMode] = &[
    PhyInterfaceMode::Na,
    PhyInterfaceMode::Internal,
    PhyInterfaceMode::Mii,
    PhyInterfaceMode::Gmii,
    PhyInterfaceMode::Sgmii,
    PhyInterfaceMode::Tbi,
    PhyInterfaceMode::Rmii,
    PhyInterfaceMode::Rgmii,
    PhyInterfaceMode::RgmiiId,
    PhyInterfaceMode::RgmiiRxid,
    PhyInterfaceMode::RgmiiTxid,
    PhyInterfaceMode::Rtbi,
    PhyInterfaceMode::Smii,
    PhyInterfaceMode::Xgmii,
    PhyInterfaceMode::Moca,
    PhyInterfaceMode::Qsgmii,
    PhyInterfaceMode::Trgmii,
    PhyInterfaceMode::_1000BaseX,
    PhyInterfaceMode::_2500BaseX,
    PhyInterfaceMode::Rxaui,
    PhyInterfaceMode::Xaui,
    PhyInterfaceMode::_10GBaseKr,
    PhyInterfaceMode::Usxgmii,
];

impl PhyInterfaceMode {
    /// Device tree name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            PhyInterfaceMode::Na => "",
            PhyInterfaceMode::Internal => "internal",
            PhyInterfaceMode::Mii => "mii",
            PhyInterfaceMode::Gmii => "gmii",
            PhyInterfaceMode::Sgmii => "sgmii",
            PhyInterfaceMode::Tbi => "tbi",
            PhyInterfaceMode::Rmii => "rmii",
            PhyInterfaceMode::Rgmii => "rgmii",
            PhyInterfaceMode::RgmiiId => "rgmii-id",
            PhyInterfaceMode::RgmiiRxid => "rgmii-rxid",
            PhyInterfaceMode::RgmiiTxid => "rgmii-txid",
            PhyInterfaceMode::Rtbi => "rtbi",
            PhyInterfaceMode::Smii => "smii",
            PhyInterfaceMode::Xgmii => "xgmii",
            PhyInterfaceMode::Moca => "moca",
            PhyInterfaceMode::Qsgmii => "qsgmii",
            PhyInterfaceMode::Trgmii => "trgmii",
            PhyInterfaceMode::_1000BaseX => "1000base-x",
            PhyInterfaceMode::_2500BaseX => "2500base-x",
            PhyInterfaceMode::Rxaui => "rxaui",
            PhyInterfaceMode::Xaui => "xaui",
            PhyInterfaceMode::_10GBaseKr => "10gbase-kr",
            PhyInterfaceMode::Usxgmii => "usxgmii",
        }
    }
}

impl FromStr for PhyInterfaceMode {
    type Err = Error;

    /// Parse a `phy-mode` string. Matching is case-insensitive like `of_get_phy_mode`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::NotFound);
        }
        MODES
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or(Error::NoDevice)
    }
}

impl core::fmt::Display for PhyInterfaceMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
