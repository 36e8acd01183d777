//! Property-based tests for TableState operations.
//!
//! These tests verify the paging invariants: for any sequence of table
//! operations, the current page stays inside the available range and the
//! offset/limit pair always describes a valid query window.

use ledgerdesk_core::managers::table_state::{TableState, TableStateTrait};
use proptest::prelude::*;

/// Operations that can be performed on the TableState.
#[derive(Debug, Clone)]
enum TableOp {
    SetTotal(usize),
    SetPage(usize),
    NextPage,
    PrevPage,
    SetPageSize(usize),
    ToggleSort(u8),
    SetFilter(String),
    ClearFilter,
}

/// Strategy for generating a sequence of table operations.
fn arb_table_ops() -> impl Strategy<Value = Vec<TableOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => (0..500usize).prop_map(TableOp::SetTotal),
            2 => (0..50usize).prop_map(TableOp::SetPage),
            2 => Just(TableOp::NextPage),
            2 => Just(TableOp::PrevPage),
            1 => (0..60usize).prop_map(TableOp::SetPageSize),
            1 => (0..3u8).prop_map(TableOp::ToggleSort),
            1 => "[a-z]{0,6}".prop_map(TableOp::SetFilter),
            1 => Just(TableOp::ClearFilter),
        ],
        1..60,
    )
}

static COLUMNS: &[&str] = &["number", "date", "amount"];

// **Property: paging invariants**
//
// *For any* sequence of table operations:
//   - `limit()` is never zero,
//   - `offset()` always equals `page() * limit()`,
//   - `page()` stays within the available page range (or 0 when empty),
//   - applying a filter lands on the first page.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn paging_invariants_hold(ops in arb_table_ops()) {
        let mut state = TableState::new();

        for op in &ops {
            match op {
                TableOp::SetTotal(total) => state.set_total(*total),
                TableOp::SetPage(page) => state.set_page(*page),
                TableOp::NextPage => state.next_page(),
                TableOp::PrevPage => state.prev_page(),
                TableOp::SetPageSize(size) => state.set_page_size(*size),
                TableOp::ToggleSort(col) => {
                    state.toggle_sort(COLUMNS[*col as usize % COLUMNS.len()])
                }
                TableOp::SetFilter(filter) => {
                    state.set_filter(filter);
                    prop_assert_eq!(state.page(), 0, "filtering must land on the first page");
                }
                TableOp::ClearFilter => {
                    state.clear_filter();
                    prop_assert_eq!(state.page(), 0);
                }
            }

            prop_assert!(state.limit() > 0);
            prop_assert_eq!(state.offset(), state.page() * state.limit());
            if state.page_count() == 0 {
                prop_assert_eq!(state.page(), 0, "empty tables stay on page 0");
            } else {
                prop_assert!(
                    state.page() < state.page_count(),
                    "page {} out of range for {} pages after {:?}",
                    state.page(),
                    state.page_count(),
                    op
                );
            }
        }
    }
}
