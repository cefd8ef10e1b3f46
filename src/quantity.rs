/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    /// 증기압 (내부 기준 psi)
    Pressure,
    /// 체적 (내부 기준 bbl)
    Volume,
}
