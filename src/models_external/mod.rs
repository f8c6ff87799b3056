pub mod match_rsp;
pub mod match_stats;
pub mod player;
