//! Dashboard view-model: pure query functions over a customer snapshot.
//!
//! Everything here is recomputed in full on each call; the expected data
//! scale makes incremental diffing unnecessary.

use std::collections::HashMap;

use crate::domain::{Customer, LeadStatus};

/// Status selector for the dashboard list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(LeadStatus),
}

impl StatusFilter {
    pub fn parse(s: &str) -> Option<Self> {
        if s == "All" {
            Some(StatusFilter::All)
        } else {
            LeadStatus::from_str(s).map(StatusFilter::Only)
        }
    }
}

/// Identity for `All`, exact-match filter otherwise.
pub fn filter_by_status(all: &[Customer], filter: StatusFilter) -> Vec<Customer> {
    match filter {
        StatusFilter::All => all.to_vec(),
        StatusFilter::Only(status) => {
            all.iter().filter(|c| c.status == status).cloned().collect()
        }
    }
}

/// Case-insensitive substring match against name, email, or the raw mobile
/// value. An empty or whitespace-only term passes everything through.
/// Preserves the input order.
pub fn search(all: &[Customer], term: &str) -> Vec<Customer> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return all.to_vec();
    }
    all.iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&term)
                || c.email.to_lowercase().contains(&term)
                || c.mobile.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// The combined dashboard filter: status first, then search term.
pub fn apply_filters(all: &[Customer], filter: StatusFilter, term: &str) -> Vec<Customer> {
    search(&filter_by_status(all, filter), term)
}

/// Occurrence count per observed status. Statuses with no occurrences are
/// absent; read through `count_for` to default them to zero.
pub fn counts_by_status(all: &[Customer]) -> HashMap<LeadStatus, usize> {
    let mut counts = HashMap::new();
    for customer in all {
        *counts.entry(customer.status).or_insert(0) += 1;
    }
    counts
}

pub fn count_for(counts: &HashMap<LeadStatus, usize>, status: LeadStatus) -> usize {
    counts.get(&status).copied().unwrap_or(0)
}

/// Customers still in play, i.e. not Closure / Not Interested.
pub fn active_count(all: &[Customer]) -> usize {
    all.iter().filter(|c| !c.status.is_inactive()).count()
}
