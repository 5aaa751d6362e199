//! Counters describing a filtering run

use serde::{Deserialize, Serialize};

/// Statistics collected while filtering a stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    /// Bytes consumed from the source
    pub bytes_in: u64,
    /// Bytes written to the sink
    pub bytes_out: u64,
    /// Line feeds emitted
    pub lines: u64,
    /// Carriage returns consumed
    pub carriage_returns: u64,
    /// Non-empty chunks processed
    pub chunks: u64,
    /// Longest line held in memory
    pub peak_line_len: usize,
}

impl FilterStats {
    /// Bytes removed by collapsing overwrites
    pub fn collapsed_bytes(&self) -> u64 {
        self.bytes_in.saturating_sub(self.bytes_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_bytes() {
        let stats = FilterStats {
            bytes_in: 10,
            bytes_out: 4,
            ..FilterStats::default()
        };
        assert_eq!(stats.collapsed_bytes(), 6);
    }

    #[test]
    fn test_serializes_field_names() {
        let stats = FilterStats {
            lines: 3,
            ..FilterStats::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"lines\":3"));
        assert!(json.contains("\"carriage_returns\":0"));
    }
}
