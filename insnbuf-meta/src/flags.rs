use itertools::Itertools;

/// Human readable names for the members of a flag set.
pub trait FlagNames: Copy + 'static {
    const NAMES: &'static [(Self, &'static str)];

    fn contains_flag(&self, flag: Self) -> bool;

    fn names(&self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains_flag(*flag))
            .map(|(_, name)| *name)
            .collect()
    }

    fn join(&self, delim: &str) -> String {
        Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains_flag(*flag))
            .map(|(_, name)| *name)
            .join(delim)
    }
}
