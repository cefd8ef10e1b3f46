//! RVP 블렌딩 계산 모듈 모음.
//!
//! 기준 휘발유와 부탄 두 스트림의 혼합 RVP 계산(정방향)과 목표 RVP를 만드는
//! 부탄 체적 탐색(역방향)이 핵심이며, 나머지는 그 결과를 해석하는 보조 모듈이다.

pub mod advisory;
pub mod blend_rvp;
pub mod compliance;
pub mod error;
pub mod optimizer;
pub mod presets;
pub mod report;
pub mod stream;

pub use blend_rvp::*;
pub use error::BlendError;
pub use optimizer::*;
pub use stream::{Stream, StreamRole};
