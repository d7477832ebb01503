//! Desktop host adapters for `folio-core`.

pub mod input {
    pub mod script;
}
pub mod notify;
pub mod render;
pub mod storage {
    pub mod json_store;
}
