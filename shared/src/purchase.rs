//! Two-phase purchase flow: quote, then confirm.
//!
//! The cost of a buy is a function of circulating supply, so a quote is
//! only valid until someone else buys. The flow never reuses a quote - a
//! changed amount means a fresh read call - and the prompt shows exactly
//! the cost the transaction will attach. The contract remains the final
//! arbiter: a quote gone stale between prompt and confirmation reverts
//! on-chain rather than being re-validated here.

use alloy_primitives::U256;

use crate::utils::format_eth;

/// A priced purchase, held while the confirmation prompt is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseQuote {
    /// Requested whole-token count.
    pub amount: u64,
    /// Cost exactly as returned by the contract's read call; this is the
    /// value attached to the buy transaction.
    pub cost_wei: U256,
    /// Display form of `cost_wei`, unit conversion only.
    pub cost_eth: String,
}

impl PurchaseQuote {
    pub fn new(amount: u64, cost_wei: U256) -> Self {
        Self {
            amount,
            cost_wei,
            cost_eth: format_eth(cost_wei),
        }
    }
}

/// Screen-local purchase state. The confirmation prompt is open exactly
/// while the flow holds a quote.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum PurchaseFlow {
    /// No quote requested.
    #[default]
    Idle,
    /// Quote resolved; prompt open, waiting for confirm or cancel.
    Quoted(PurchaseQuote),
    /// Buy transaction in flight with the quoted cost attached.
    Submitting(PurchaseQuote),
}

impl PurchaseFlow {
    /// A resolved quote opens the prompt. Re-quoting discards the previous
    /// quote outright - cost is supply-dependent and never reused.
    pub fn quoted(&mut self, quote: PurchaseQuote) {
        *self = PurchaseFlow::Quoted(quote);
    }

    /// Close the prompt with no on-chain effect.
    pub fn cancel(&mut self) {
        *self = PurchaseFlow::Idle;
    }

    /// Confirm the open prompt. Returns the quote to submit, or `None`
    /// when there is no open prompt (already submitting, or idle).
    pub fn confirm(&mut self) -> Option<PurchaseQuote> {
        match self {
            PurchaseFlow::Quoted(quote) => {
                let quote = quote.clone();
                *self = PurchaseFlow::Submitting(quote.clone());
                Some(quote)
            }
            _ => None,
        }
    }

    /// Transaction confirmed on-chain; prompt closes.
    pub fn completed(&mut self) {
        *self = PurchaseFlow::Idle;
    }

    /// Submission failed; fall back to the open prompt so the user can
    /// retry or cancel.
    pub fn submit_failed(&mut self) {
        if let PurchaseFlow::Submitting(quote) = self {
            *self = PurchaseFlow::Quoted(quote.clone());
        }
    }

    pub fn quote(&self) -> Option<&PurchaseQuote> {
        match self {
            PurchaseFlow::Quoted(q) | PurchaseFlow::Submitting(q) => Some(q),
            PurchaseFlow::Idle => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, PurchaseFlow::Submitting(_))
    }

    pub fn prompt_open(&self) -> bool {
        !matches!(self, PurchaseFlow::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(amount: u64, wei: u64) -> PurchaseQuote {
        PurchaseQuote::new(amount, U256::from(wei))
    }

    #[test]
    fn prompt_shows_exactly_what_the_transaction_attaches() {
        use alloy_primitives::utils::parse_ether;

        let cost = parse_ether("0.00375").unwrap();
        let q = PurchaseQuote::new(250, cost);
        assert_eq!(q.cost_eth, "0.00375");
        // Attached value is the raw read-call result, not a reparse of the
        // display string.
        assert_eq!(q.cost_wei, cost);
        assert_eq!(parse_ether(&q.cost_eth).unwrap(), q.cost_wei);
    }

    #[test]
    fn quote_opens_prompt_and_confirm_submits() {
        let mut flow = PurchaseFlow::default();
        assert!(!flow.prompt_open());

        flow.quoted(quote(10, 1_000));
        assert!(flow.prompt_open());
        assert!(!flow.is_submitting());

        let submitted = flow.confirm().unwrap();
        assert_eq!(submitted.amount, 10);
        assert!(flow.is_submitting());

        flow.completed();
        assert_eq!(flow, PurchaseFlow::Idle);
    }

    #[test]
    fn requoting_replaces_the_previous_quote() {
        let mut flow = PurchaseFlow::default();
        flow.quoted(quote(10, 1_000));
        flow.quoted(quote(25, 9_999));
        let held = flow.quote().unwrap();
        assert_eq!(held.amount, 25);
        assert_eq!(held.cost_wei, U256::from(9_999u64));
    }

    #[test]
    fn cancel_issues_nothing_and_returns_to_idle() {
        let mut flow = PurchaseFlow::default();
        flow.quoted(quote(10, 1_000));
        flow.cancel();
        assert_eq!(flow, PurchaseFlow::Idle);
        // Nothing left to confirm.
        assert!(flow.confirm().is_none());
    }

    #[test]
    fn failed_submission_reopens_the_prompt() {
        let mut flow = PurchaseFlow::default();
        flow.quoted(quote(10, 1_000));
        flow.confirm().unwrap();
        flow.submit_failed();
        assert_eq!(flow, PurchaseFlow::Quoted(quote(10, 1_000)));
    }

    #[test]
    fn confirm_is_ignored_while_submitting() {
        let mut flow = PurchaseFlow::default();
        flow.quoted(quote(10, 1_000));
        flow.confirm().unwrap();
        assert!(flow.confirm().is_none());
        assert!(flow.is_submitting());
    }
}
