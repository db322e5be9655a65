pub(crate) mod composite;
pub(crate) mod layout_string;
pub(crate) mod options;
pub(crate) mod resolution;
pub(crate) mod watermark;
