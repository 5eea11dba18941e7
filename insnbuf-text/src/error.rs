use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("could not reserve {requested} bytes of text storage")]
    Allocation { requested: usize },
}

impl Error {
    pub(crate) fn allocation(requested: usize) -> Self {
        Self::Allocation { requested }
    }

    pub fn requested(&self) -> usize {
        match self {
            Self::Allocation { requested } => *requested,
        }
    }
}
