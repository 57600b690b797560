pub(crate) mod fonts;
mod layout;
