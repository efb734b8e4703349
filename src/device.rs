//! The host platform device a glue driver binds to.

use crate::clk::Clk;
use crate::error::Error;
use crate::of::DeviceNode;
use crate::regmap::Regmap;

/// Platform device services used during probe.
pub trait Device {
    /// Clock handle type
    type Clk: Clk;
    /// Syscon register map type
    type Regmap: Regmap;
    /// Device tree node type
    type Node: DeviceNode;

    /// Device tree node describing the device, if any.
    fn of_node(&self) -> Option<&Self::Node>;

    /// Get and enable the clock named `id` in `clock-names`.
    /// The clock stays enabled for as long as the handle lives.
    fn clk_get_enabled(&self, id: &str) -> Result<Self::Clk, Error>;

    /// Look up the register map of a syscon node.
    fn syscon_node_to_regmap(&self, node: &Self::Node) -> Result<Self::Regmap, Error>;

    /// Whether a boolean device property is present.
    fn property_read_bool(&self, propname: &str) -> bool {
        self.of_node().is_some_and(|np| np.read_bool(propname))
    }
}
