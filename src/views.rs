pub(crate) mod exhibitions;
pub(crate) mod page;
pub(crate) mod refresh;
pub(crate) mod status;
pub(crate) mod toast;
