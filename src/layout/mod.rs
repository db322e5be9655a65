pub(crate) mod anchor;
pub(crate) mod fit;
pub(crate) mod solver;
pub(crate) mod spec;
