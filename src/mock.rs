//! Recording host collaborators for unit tests.

extern crate alloc;

use alloc::borrow::ToOwned;
use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::clk::Clk;
use crate::device::Device;
use crate::error::Error;
use crate::of::{DeviceNode, PhandleArgs};
use crate::phy::PhyInterfaceMode;
use crate::regmap::Regmap;
use crate::stmmac::{PlatData, ProbeFailure, Stmmac, StmmacResources};

#[derive(Debug, PartialEq, Clone)]
pub enum A {
    ClkGet(&'static str),
    SetRate(&'static str, u32),
    RegRead(u32),
    RegWrite(u32, u32),
    GetResources,
    ProbeConfigDt,
    RemoveConfigDt,
    DvrProbe,
    PltfrRemove,
    Suspend,
    Resume,
}

#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<A>>>);

impl Log {
    pub fn push(&self, a: A) {
        self.0.borrow_mut().push(a);
    }

    pub fn take(&self) -> Vec<A> {
        core::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn events(&self) -> Vec<A> {
        self.0.borrow().clone()
    }

    pub fn rates(&self) -> Vec<(&'static str, u32)> {
        self.events()
            .into_iter()
            .filter_map(|a| match a {
                A::SetRate(name, rate) => Some((name, rate)),
                _ => None,
            })
            .collect()
    }

    pub fn reg_writes(&self) -> Vec<(u32, u32)> {
        self.events()
            .into_iter()
            .filter_map(|a| match a {
                A::RegWrite(reg, val) => Some((reg, val)),
                _ => None,
            })
            .collect()
    }
}

impl core::fmt::Debug for Log {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.0.borrow().iter()).finish()
    }
}

#[derive(Debug)]
pub struct MockClk {
    pub name: &'static str,
    pub rate: u32,
    pub fail_set_rate: bool,
    log: Log,
}

impl MockClk {
    pub fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            rate: 0,
            fail_set_rate: false,
            log: log.clone(),
        }
    }
}

impl Clk for MockClk {
    fn set_rate(&mut self, rate: u32) -> Result<(), Error> {
        self.log.push(A::SetRate(self.name, rate));
        if self.fail_set_rate {
            return Err(Error::InvalidArgument);
        }
        self.rate = rate;
        Ok(())
    }

    fn rate(&self) -> u32 {
        self.rate
    }
}

pub struct MockRegmap {
    regs: BTreeMap<u32, u32>,
    write_error: Option<Error>,
    log: Log,
}

impl Regmap for MockRegmap {
    fn read(&mut self, reg: u32) -> Result<u32, Error> {
        self.log.push(A::RegRead(reg));
        Ok(self.regs.get(&reg).copied().unwrap_or(0))
    }

    fn write(&mut self, reg: u32, val: u32) -> Result<(), Error> {
        self.log.push(A::RegWrite(reg, val));
        if let Some(err) = self.write_error {
            return Err(err);
        }
        self.regs.insert(reg, val);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockNode {
    name: String,
    compatible: Vec<String>,
    bools: Vec<String>,
    strings: Vec<(String, String)>,
    phandles: Vec<(String, MockNode, Vec<u32>)>,
}

impl MockNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Default::default()
        }
    }

    pub fn compatible(mut self, compat: &str) -> Self {
        self.compatible.push(compat.to_owned());
        self
    }

    pub fn flag(mut self, propname: &str) -> Self {
        self.bools.push(propname.to_owned());
        self
    }

    pub fn string(mut self, propname: &str, value: &str) -> Self {
        self.strings.push((propname.to_owned(), value.to_owned()));
        self
    }

    pub fn phandle(mut self, list_name: &str, target: MockNode, args: &[u32]) -> Self {
        self.phandles.push((list_name.to_owned(), target, args.to_vec()));
        self
    }
}

impl DeviceNode for MockNode {
    fn full_name(&self) -> &str {
        &self.name
    }

    fn is_compatible(&self, compat: &str) -> bool {
        self.compatible.iter().any(|c| c == compat)
    }

    fn read_bool(&self, propname: &str) -> bool {
        self.bools.iter().any(|p| p == propname)
    }

    fn read_string(&self, propname: &str) -> Result<&str, Error> {
        self.strings
            .iter()
            .find(|(name, _)| name == propname)
            .map(|(_, value)| value.as_str())
            .ok_or(Error::InvalidArgument)
    }

    fn parse_phandle_with_fixed_args(
        &self,
        list_name: &str,
        cell_count: usize,
        index: usize,
    ) -> Result<PhandleArgs<Self>, Error> {
        let (_, np, args) = self
            .phandles
            .iter()
            .filter(|(name, _, _)| name == list_name)
            .nth(index)
            .ok_or(Error::NotFound)?;
        if args.len() < cell_count {
            return Err(Error::InvalidArgument);
        }
        PhandleArgs::new(np.clone(), &args[..cell_count])
    }
}

pub struct MockDevice {
    pub node: Option<MockNode>,
    pub clocks: Vec<&'static str>,
    pub clk_error: Option<Error>,
    pub regmap_error: Option<Error>,
    pub regmap_write_error: Option<Error>,
    pub syscon: BTreeMap<u32, u32>,
    pub log: Log,
}

impl MockDevice {
    pub fn new(node: MockNode) -> Self {
        Self {
            node: Some(node),
            clocks: alloc::vec!["tx", "gtx"],
            clk_error: None,
            regmap_error: None,
            regmap_write_error: None,
            syscon: BTreeMap::new(),
            log: Log::default(),
        }
    }
}

impl Device for MockDevice {
    type Clk = MockClk;
    type Regmap = MockRegmap;
    type Node = MockNode;

    fn of_node(&self) -> Option<&MockNode> {
        self.node.as_ref()
    }

    fn clk_get_enabled(&self, id: &str) -> Result<MockClk, Error> {
        let name = self.clocks.iter().copied().find(|c| *c == id).ok_or(Error::NotFound)?;
        if let Some(err) = self.clk_error {
            return Err(err);
        }
        self.log.push(A::ClkGet(name));
        Ok(MockClk::new(name, &self.log))
    }

    fn syscon_node_to_regmap(&self, _node: &MockNode) -> Result<MockRegmap, Error> {
        if let Some(err) = self.regmap_error {
            return Err(err);
        }
        Ok(MockRegmap {
            regs: self.syscon.clone(),
            write_error: self.regmap_write_error,
            log: self.log.clone(),
        })
    }
}

pub struct MockStmmac<G> {
    pub interface: PhyInterfaceMode,
    pub resources_error: Option<Error>,
    pub config_error: Option<Error>,
    pub probe_error: Option<Error>,
    pub probed: Option<PlatData<G>>,
    pub released: Option<PlatData<G>>,
    log: Log,
}

impl<G> MockStmmac<G> {
    pub fn new(interface: PhyInterfaceMode, log: &Log) -> Self {
        Self {
            interface,
            resources_error: None,
            config_error: None,
            probe_error: None,
            probed: None,
            released: None,
            log: log.clone(),
        }
    }
}

impl<G> Stmmac<MockDevice, G> for MockStmmac<G> {
    fn get_platform_resources(&mut self, _dev: &MockDevice) -> Result<StmmacResources, Error> {
        self.log.push(A::GetResources);
        match self.resources_error {
            Some(err) => Err(err),
            None => Ok(StmmacResources {
                addr: 0x1603_0000,
                irq: 7,
                ..Default::default()
            }),
        }
    }

    fn probe_config_dt(&mut self, _dev: &MockDevice, _mac: Option<&[u8; 6]>) -> Result<PlatData<G>, Error> {
        self.log.push(A::ProbeConfigDt);
        match self.config_error {
            Some(err) => Err(err),
            None => {
                let mut plat = PlatData::new(self.interface);
                plat.dma_cfg.pbl = 16;
                Ok(plat)
            }
        }
    }

    fn remove_config_dt(&mut self, _dev: &MockDevice, plat: PlatData<G>) {
        self.log.push(A::RemoveConfigDt);
        self.released = Some(plat);
    }

    fn dvr_probe(
        &mut self,
        _dev: &MockDevice,
        plat: PlatData<G>,
        _res: StmmacResources,
    ) -> Result<(), ProbeFailure<G>> {
        self.log.push(A::DvrProbe);
        match self.probe_error {
            Some(error) => Err(ProbeFailure { error, plat }),
            None => {
                self.probed = Some(plat);
                Ok(())
            }
        }
    }

    fn pltfr_remove(&mut self, _dev: &MockDevice) {
        self.log.push(A::PltfrRemove);
        self.probed = None;
    }

    fn pltfr_suspend(&mut self, _dev: &MockDevice) -> Result<(), Error> {
        self.log.push(A::Suspend);
        Ok(())
    }

    fn pltfr_resume(&mut self, _dev: &MockDevice) -> Result<(), Error> {
        self.log.push(A::Resume);
        Ok(())
    }
}
