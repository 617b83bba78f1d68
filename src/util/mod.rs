pub(crate) mod t;
