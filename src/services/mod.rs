//! Service layer for the expense calendar
//!
//! The service layer holds the application logic on top of the storage
//! layer: the expense store, the calendar grid, monthly aggregation and
//! month navigation.

pub mod aggregation;
pub mod calendar;
pub mod navigation;
pub mod store;

pub use aggregation::{BudgetStatus, CategoryTotal, MonthlySummary, RankedCategory};
pub use calendar::{build_month_grid, CalendarCell, CalendarGrid, DayCell};
pub use navigation::{resolve_month, year_options, MonthCursor};
pub use store::{BudgetMap, ExpenseStore};
