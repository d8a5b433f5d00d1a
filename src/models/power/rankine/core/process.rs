/// Property held constant along a process segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessKind {
    /// Constant entropy: the ideal pump and turbine.
    Isentropic,

    /// Constant pressure: the boiler, reheater, and condenser.
    Isobaric,

    /// Constant enthalpy: a throttling valve.
    Isenthalpic,
}

/// What a process segment does to the working fluid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    Compression,
    HeatAddition,
    Expansion,
    HeatRejection,
}

impl SegmentRole {
    /// Returns the process an ideal component in this role follows.
    #[must_use]
    pub fn process(self) -> ProcessKind {
        match self {
            Self::Compression | Self::Expansion => ProcessKind::Isentropic,
            Self::HeatAddition | Self::HeatRejection => ProcessKind::Isobaric,
        }
    }
}

/// Connects two state points by index into the solved point list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSegment {
    pub from: usize,
    pub to: usize,
    pub kind: ProcessKind,
    pub role: SegmentRole,
}

impl ProcessSegment {
    pub(super) fn ideal(from: usize, to: usize, role: SegmentRole) -> Self {
        Self {
            from,
            to,
            kind: role.process(),
            role,
        }
    }
}
