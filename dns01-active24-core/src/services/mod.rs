//! 业务逻辑服务层

mod challenge_service;

pub use challenge_service::{
    CHALLENGE_RECORD_TTL, ChallengeSolver, SOLVER_NAME, challenge_record, provider_config,
};
