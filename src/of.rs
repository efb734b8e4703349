//! Device tree nodes, phandle references and match tables.

use heapless::Vec;

use crate::error::Error;
use crate::phy::PhyInterfaceMode;

/// Maximum number of argument cells in a phandle reference.
pub const MAX_PHANDLE_ARGS: usize = 16;

/// A device tree node owned by the host.
///
/// Dropping a node obtained through a phandle releases its reference (`of_node_put`).
pub trait DeviceNode: Sized {
    /// Full node name, for diagnostics.
    fn full_name(&self) -> &str;

    /// Whether `compatible` lists `compat`.
    fn is_compatible(&self, compat: &str) -> bool;

    /// Whether a boolean property is present.
    fn read_bool(&self, propname: &str) -> bool;

    /// Read a string property.
    fn read_string(&self, propname: &str) -> Result<&str, Error>;

    /// Resolve entry `index` of a `<&phandle arg...>` list with `cell_count` fixed cells.
    fn parse_phandle_with_fixed_args(
        &self,
        list_name: &str,
        cell_count: usize,
        index: usize,
    ) -> Result<PhandleArgs<Self>, Error>;
}

/// A resolved phandle reference.
#[derive(Debug)]
pub struct PhandleArgs<N> {
    /// Referenced node
    pub np: N,
    /// Argument cells following the phandle
    pub args: Vec<u32, MAX_PHANDLE_ARGS>,
}

impl<N> PhandleArgs<N> {
    /// Build from a node and its argument cells.
    pub fn new(np: N, args: &[u32]) -> Result<Self, Error> {
        let args = Vec::from_slice(args).map_err(|_| Error::InvalidArgument)?;
        Ok(Self { np, args })
    }
}

/// Read the PHY interface mode from `phy-mode`, falling back to `phy-connection-type`.
pub fn get_phy_mode<N: DeviceNode>(node: &N) -> Result<PhyInterfaceMode, Error> {
    let name = node
        .read_string("phy-mode")
        .or_else(|_| node.read_string("phy-connection-type"))?;
    name.parse()
}

/// One entry of an OF match table.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct OfDeviceId {
    /// Compatible string to match.
    pub compatible: &'static str,
}

/// Return the first table entry the node is compatible with.
pub fn match_node<'a, N: DeviceNode>(table: &'a [OfDeviceId], node: &N) -> Option<&'a OfDeviceId> {
    table.iter().find(|id| node.is_compatible(id.compatible))
}
