//! リクエスト順序トークン
//!
//! 発行済みのfetchは中断できないため、後から届いた古いレスポンスで表示を上書きしないよう
//! 最新のトークンと一致するレスポンスだけを反映する。

/// リクエストに付与するトークン
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// 単調増加するトークンの発行元
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいトークンを発行（以前のトークンはすべて古くなる）
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// 最後に発行したトークンか
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_is_monotonic() {
        let mut seq = RequestSequence::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(b > a);
        assert_eq!(b.value(), a.value() + 1);
    }

    #[test]
    fn test_only_latest_is_current() {
        let mut seq = RequestSequence::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
