pub mod csfloat;
pub mod net;
pub mod search;
pub mod steamcommunity;
