use derive_new::new;

/// Handle to one run of the job, identified by its ordinal number.
///
/// The host owns the run and everything it knows about it; this crate
/// only ever reads the number and hands the handle back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct RunRef(u32);

impl RunRef {
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RunRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
