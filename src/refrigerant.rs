use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 지원하는 냉매 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GasId {
    R410A,
    R32,
    R22,
}

impl GasId {
    /// 표/메뉴 표시 순서.
    pub const ALL: [GasId; 3] = [GasId::R410A, GasId::R32, GasId::R22];

    pub fn as_str(&self) -> &'static str {
        match self {
            GasId::R410A => "R410A",
            GasId::R32 => "R32",
            GasId::R22 => "R22",
        }
    }
}

impl fmt::Display for GasId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 알 수 없는 냉매 이름.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGas(pub String);

impl fmt::Display for UnknownGas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "알 수 없는 냉매: {}", self.0)
    }
}

impl std::error::Error for UnknownGas {}

impl FromStr for GasId {
    type Err = UnknownGas;

    /// 대소문자와 대시(`R-410A`)를 무시하고 해석한다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != ' ')
            .collect::<String>()
            .to_uppercase();
        match norm.as_str() {
            "R410A" | "410A" => Ok(GasId::R410A),
            "R32" | "32" => Ok(GasId::R32),
            "R22" | "22" => Ok(GasId::R22),
            _ => Err(UnknownGas(s.trim().to_string())),
        }
    }
}
