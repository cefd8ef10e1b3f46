/// 블렌딩/최적화 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlendError {
    /// 유한하지 않거나 음수/0 인 RVP·체적 등 잘못된 입력
    #[error("입력 오류: {0}")]
    InvalidInput(&'static str),
    /// 두 스트림 체적이 모두 0 이라 혼합 비율을 정의할 수 없음
    #[error("총 체적이 0 이므로 혼합 비율을 계산할 수 없습니다.")]
    DivisionByZero,
    /// 최적화 입력이 기준 RVP < 목표 RVP < 부탄 RVP 순서를 만족하지 않음
    #[error(
        "최적화 조건 위반: 기준 RVP({base_rvp}) < 목표 RVP({target_rvp}) < 부탄 RVP({butane_rvp}) 이어야 합니다."
    )]
    PreconditionViolation {
        base_rvp: f64,
        target_rvp: f64,
        butane_rvp: f64,
    },
}
