//! Expense store
//!
//! The single state container for expenses and monthly budgets. Every
//! mutation goes through this type and is written through to the key-value
//! adapter as a full re-serialization of the affected collection.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseForm, ExpenseId, Money, MonthKey, NewExpense};
use crate::storage::{KeyValueStore, BUDGETS_KEY, EXPENSES_KEY};

/// Monthly budgets keyed by month
pub type BudgetMap = BTreeMap<MonthKey, Money>;

/// In-memory expenses and budgets, synchronized to a persistence adapter
pub struct ExpenseStore<S: KeyValueStore> {
    adapter: S,
    expenses: Vec<Expense>,
    budgets: BudgetMap,
}

impl<S: KeyValueStore> ExpenseStore<S> {
    /// Load both collections from the adapter
    ///
    /// Missing or malformed data yields an empty collection; loading never
    /// fails.
    pub fn load(adapter: S) -> Self {
        let expenses = load_expenses(&adapter);
        let budgets = load_budgets(&adapter);

        debug!(
            expenses = expenses.len(),
            budgets = budgets.len(),
            "Loaded expense store"
        );

        Self {
            adapter,
            expenses,
            budgets,
        }
    }

    /// The persistence adapter
    pub fn adapter(&self) -> &S {
        &self.adapter
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether no expenses are stored
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Expenses recorded on a given day, in insertion order
    pub fn expenses_on(&self, date: NaiveDate) -> Vec<&Expense> {
        self.expenses.iter().filter(|e| e.date == date).collect()
    }

    /// Look up an expense by full id, short id, or unambiguous id prefix
    pub fn find(&self, id_or_prefix: &str) -> ExpenseResult<&Expense> {
        if let Some(exact) = self.expenses.iter().find(|e| e.id.as_str() == id_or_prefix) {
            return Ok(exact);
        }

        let mut matches = self.expenses.iter().filter(|e| e.id.matches(id_or_prefix));
        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense),
            (Some(_), Some(_)) => Err(ExpenseError::Validation(format!(
                "Expense id '{}' is ambiguous",
                id_or_prefix
            ))),
            (None, _) => Err(ExpenseError::expense_not_found(id_or_prefix)),
        }
    }

    /// Record a new expense and persist the collection
    pub fn add(&mut self, new: NewExpense) -> ExpenseResult<Expense> {
        let mut id = ExpenseId::new();
        while self.expenses.iter().any(|e| e.id == id) {
            id = ExpenseId::new();
        }

        let expense = Expense::from_new(id, new);
        let mut expenses = self.expenses.clone();
        expenses.push(expense.clone());
        self.commit_expenses(expenses)?;

        info!(
            id = %expense.id,
            date = %expense.date,
            amount = %expense.amount,
            "Added expense"
        );
        Ok(expense)
    }

    /// Submit the add-expense form for `date`
    ///
    /// Invalid input is ignored: nothing is stored and `Ok(None)` is returned.
    pub fn submit(&mut self, date: NaiveDate, form: &ExpenseForm) -> ExpenseResult<Option<Expense>> {
        match form.validate(date) {
            Some(new) => self.add(new).map(Some),
            None => {
                debug!(?form, "Ignoring invalid expense form");
                Ok(None)
            }
        }
    }

    /// Delete an expense by exact id
    ///
    /// Deleting an unknown id is a no-op that returns `false`. The
    /// collection is written through either way.
    pub fn delete(&mut self, id: &ExpenseId) -> ExpenseResult<bool> {
        let expenses: Vec<Expense> = self
            .expenses
            .iter()
            .filter(|e| &e.id != id)
            .cloned()
            .collect();
        let removed = expenses.len() != self.expenses.len();

        self.commit_expenses(expenses)?;

        if removed {
            info!(id = %id, "Deleted expense");
        } else {
            debug!(id = %id, "Delete requested for unknown expense");
        }
        Ok(removed)
    }

    /// Budget for a month (zero when none has been set)
    pub fn budget_for(&self, month: MonthKey) -> Money {
        self.budgets.get(&month).copied().unwrap_or_default()
    }

    /// All budgets
    pub fn budgets(&self) -> &BudgetMap {
        &self.budgets
    }

    /// Set the budget for a month and persist the mapping
    ///
    /// Negative amounts are stored as zero.
    pub fn set_budget(&mut self, month: MonthKey, amount: Money) -> ExpenseResult<()> {
        let amount = if amount.is_negative() {
            Money::zero()
        } else {
            amount
        };

        let mut budgets = self.budgets.clone();
        budgets.insert(month, amount);
        self.commit_budgets(budgets)?;

        info!(month = %month, amount = %amount, "Set monthly budget");
        Ok(())
    }

    /// Write `expenses` through, then make it the in-memory collection
    ///
    /// On a failed write the store keeps its previous state.
    fn commit_expenses(&mut self, expenses: Vec<Expense>) -> ExpenseResult<()> {
        let json = serde_json::to_string(&expenses)?;
        self.adapter.set(EXPENSES_KEY, json)?;
        debug!(count = expenses.len(), "Persisted expenses");
        self.expenses = expenses;
        Ok(())
    }

    fn commit_budgets(&mut self, budgets: BudgetMap) -> ExpenseResult<()> {
        let json = serde_json::to_string(&budgets)?;
        self.adapter.set(BUDGETS_KEY, json)?;
        debug!(count = budgets.len(), "Persisted budgets");
        self.budgets = budgets;
        Ok(())
    }
}

fn read_key<S: KeyValueStore>(adapter: &S, key: &str) -> Option<String> {
    match adapter.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "Could not read stored data, starting empty");
            None
        }
    }
}

fn load_expenses<S: KeyValueStore>(adapter: &S) -> Vec<Expense> {
    let Some(raw) = read_key(adapter, EXPENSES_KEY) else {
        return Vec::new();
    };

    match decode_expenses(&raw) {
        Ok(expenses) => expenses,
        Err(reason) => {
            warn!(key = EXPENSES_KEY, %reason, "Stored expenses are malformed, starting empty");
            Vec::new()
        }
    }
}

fn load_budgets<S: KeyValueStore>(adapter: &S) -> BudgetMap {
    let Some(raw) = read_key(adapter, BUDGETS_KEY) else {
        return BudgetMap::new();
    };

    match decode_budgets(&raw) {
        Ok(budgets) => budgets,
        Err(reason) => {
            warn!(key = BUDGETS_KEY, %reason, "Stored budgets are malformed, starting empty");
            BudgetMap::new()
        }
    }
}

/// Decode and validate a serialized expense collection
pub fn decode_expenses(raw: &str) -> Result<Vec<Expense>, String> {
    let expenses: Vec<Expense> = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    for expense in &expenses {
        expense.validate()?;
    }
    Ok(expenses)
}

/// Decode and validate a serialized budget mapping
pub fn decode_budgets(raw: &str) -> Result<BudgetMap, String> {
    let budgets: BudgetMap = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if let Some((month, _)) = budgets.iter().find(|(_, amount)| amount.is_negative()) {
        return Err(format!("negative budget for {}", month));
    }
    Ok(budgets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::services::calendar::build_month_grid;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    /// Adapter that reads from memory but can be switched to reject writes
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_writes: bool,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>, ExpenseError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: String) -> Result<(), ExpenseError> {
            if self.fail_writes {
                return Err(ExpenseError::Storage("disk full".into()));
            }
            self.inner.set(key, value)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lunch() -> NewExpense {
        NewExpense::new(
            date(2024, 3, 15),
            "Lunch",
            Money::from_cents(1250),
            Category::FoodAndDining,
        )
    }

    fn empty_store() -> ExpenseStore<MemoryStore> {
        ExpenseStore::load(MemoryStore::new())
    }

    #[test]
    fn test_load_empty_adapter() {
        let store = empty_store();
        assert!(store.is_empty());
        assert!(store.budgets().is_empty());
    }

    #[test]
    fn test_add_assigns_unique_ids_and_keeps_date() {
        let mut store = empty_store();
        let mut ids = Vec::new();
        for _ in 0..50 {
            let expense = store.add(lunch()).unwrap();
            assert_eq!(expense.date, date(2024, 3, 15));
            ids.push(expense.id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
        assert_eq!(store.len(), 50);
    }

    #[test]
    fn test_add_writes_through() {
        let mut store = empty_store();
        let expense = store.add(lunch()).unwrap();

        let raw = store.adapter().raw(EXPENSES_KEY).unwrap();
        let persisted = decode_expenses(raw).unwrap();
        assert_eq!(persisted, vec![expense]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = empty_store();
        let later = NewExpense::new(date(2024, 3, 20), "Taxi", Money::from_cents(300), Category::Transportation);
        store.add(later).unwrap();
        store.add(lunch()).unwrap();

        let names: Vec<&str> = store.expenses().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Taxi", "Lunch"]);
    }

    #[test]
    fn test_delete_existing_and_missing() {
        let mut store = empty_store();
        let expense = store.add(lunch()).unwrap();
        store.add(lunch()).unwrap();

        assert!(store.delete(&expense.id).unwrap());
        assert_eq!(store.len(), 1);
        assert!(store.find(expense.id.as_str()).unwrap_err().is_not_found());

        let before = store.expenses().to_vec();
        assert!(!store.delete(&ExpenseId::from_string("does-not-exist")).unwrap());
        assert_eq!(store.expenses(), before.as_slice());
    }

    #[test]
    fn test_submit_ignores_invalid_form() {
        let mut store = empty_store();

        let blocked = store
            .submit(date(2024, 3, 15), &ExpenseForm::new("", "12", "Other"))
            .unwrap();
        assert!(blocked.is_none());
        assert!(store.is_empty());
        assert!(store.adapter().raw(EXPENSES_KEY).is_none());

        let added = store
            .submit(date(2024, 3, 15), &ExpenseForm::new("Lunch", "12.50", "Food & Dining"))
            .unwrap()
            .unwrap();
        assert_eq!(added.amount.cents(), 1250);
    }

    #[test]
    fn test_expenses_on_day() {
        let mut store = empty_store();
        store.add(lunch()).unwrap();
        store.add(lunch()).unwrap();
        store
            .add(NewExpense::new(date(2024, 3, 16), "Bus", Money::from_cents(100), Category::Transportation))
            .unwrap();

        assert_eq!(store.expenses_on(date(2024, 3, 15)).len(), 2);
        assert_eq!(store.expenses_on(date(2024, 3, 16)).len(), 1);
        assert!(store.expenses_on(date(2024, 3, 17)).is_empty());
    }

    #[test]
    fn test_find_by_prefix() {
        let adapter = MemoryStore::new().with_entry(
            EXPENSES_KEY,
            r#"[
                {"id":"abc111","date":"2024-03-15","name":"A","amount":1,"category":"Other"},
                {"id":"abc222","date":"2024-03-15","name":"B","amount":2,"category":"Other"}
            ]"#,
        );
        let store = ExpenseStore::load(adapter);

        assert_eq!(store.find("abc111").unwrap().name, "A");
        assert_eq!(store.find("exp-abc2").unwrap().name, "B");
        assert!(store.find("abc").unwrap_err().is_validation());
        assert!(store.find("zzz").unwrap_err().is_not_found());
    }

    #[test]
    fn test_set_budget_upserts() {
        let mut store = empty_store();
        let march = MonthKey::from_month_number(2024, 3);

        assert_eq!(store.budget_for(march), Money::zero());

        store.set_budget(march, Money::from_cents(10000)).unwrap();
        store.set_budget(march, Money::from_cents(15000)).unwrap();
        assert_eq!(store.budget_for(march).cents(), 15000);
        assert_eq!(store.budgets().len(), 1);
        assert_eq!(store.adapter().raw(BUDGETS_KEY), Some(r#"{"2024-2":150.0}"#));

        store.set_budget(march, Money::from_cents(-500)).unwrap();
        assert_eq!(store.budget_for(march), Money::zero());
    }

    #[test]
    fn test_malformed_data_loads_empty() {
        let adapter = MemoryStore::new()
            .with_entry(EXPENSES_KEY, "not json")
            .with_entry(BUDGETS_KEY, r#"{"march": 100}"#);
        let store = ExpenseStore::load(adapter);

        assert!(store.is_empty());
        assert!(store.budgets().is_empty());
    }

    #[test]
    fn test_invalid_records_make_collection_malformed() {
        let impossible_date = r#"[{"id":"1","date":"2024-02-30","name":"A","amount":1,"category":"Other"}]"#;
        assert!(decode_expenses(impossible_date).is_err());

        let negative = r#"[{"id":"1","date":"2024-02-03","name":"A","amount":-1,"category":"Other"}]"#;
        assert!(decode_expenses(negative).is_err());

        let empty_name = r#"[{"id":"1","date":"2024-02-03","name":" ","amount":1,"category":"Other"}]"#;
        assert!(decode_expenses(empty_name).is_err());

        assert!(decode_budgets(r#"{"2024-2": -5}"#).is_err());
    }

    #[test]
    fn test_legacy_data_loads() {
        let adapter = MemoryStore::new()
            .with_entry(
                EXPENSES_KEY,
                r#"[{"id":"1710489600000","date":"2024-03-15","name":"Lunch","amount":12.5,"category":"Food & Dining"}]"#,
            )
            .with_entry(BUDGETS_KEY, r#"{"2024-2":100}"#);
        let store = ExpenseStore::load(adapter);

        assert_eq!(store.len(), 1);
        assert_eq!(store.expenses()[0].category, Category::FoodAndDining);
        assert_eq!(
            store.budget_for(MonthKey::from_month_number(2024, 3)).cents(),
            10000
        );
    }

    #[test]
    fn test_round_trip_through_serialization() {
        for count in [0usize, 1, 7] {
            let mut store = empty_store();
            for i in 0..count {
                let new = NewExpense::new(
                    date(2024, 1 + (i as u32 % 12), 1 + i as u32),
                    format!("Item {}", i),
                    Money::from_cents(i as i64 * 137),
                    if i % 2 == 0 {
                        Category::Shopping
                    } else {
                        Category::Custom("Pets".into())
                    },
                );
                store.add(new).unwrap();
            }

            let json = serde_json::to_string(store.expenses()).unwrap();
            let decoded = decode_expenses(&json).unwrap();
            assert_eq!(decoded, store.expenses());
        }
    }

    #[test]
    fn test_reload_from_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let march = MonthKey::from_month_number(2024, 3);

        let mut store = ExpenseStore::load(FileStore::new(temp_dir.path()));
        let expense = store.add(lunch()).unwrap();
        store.set_budget(march, Money::from_cents(10000)).unwrap();

        let reloaded = ExpenseStore::load(FileStore::new(temp_dir.path()));
        assert_eq!(reloaded.expenses(), &[expense]);
        assert_eq!(reloaded.budget_for(march).cents(), 10000);
    }

    #[test]
    fn test_failed_writes_leave_state_unchanged() {
        let mut store = ExpenseStore::load(FlakyStore::default());
        let march = MonthKey::from_month_number(2024, 3);
        let kept = store.add(lunch()).unwrap();
        store.set_budget(march, Money::from_cents(10000)).unwrap();

        store.adapter.fail_writes = true;

        let err = store.add(lunch()).unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
        assert_eq!(store.expenses(), &[kept.clone()]);

        assert!(store.delete(&kept.id).is_err());
        assert_eq!(store.len(), 1);

        assert!(store.set_budget(march, Money::from_cents(100)).is_err());
        assert_eq!(store.budget_for(march).cents(), 10000);

        // memory and storage still agree once writes recover
        store.adapter.fail_writes = false;
        store.add(lunch()).unwrap();
        let persisted = decode_expenses(store.adapter().inner.raw(EXPENSES_KEY).unwrap()).unwrap();
        assert_eq!(persisted.len(), 2);
        assert_eq!(persisted.as_slice(), store.expenses());
    }

    #[test]
    fn test_deleted_expense_leaves_grid() {
        let mut store = empty_store();
        let expense = store.add(lunch()).unwrap();
        let today = date(2024, 3, 1);

        let grid = build_month_grid(MonthKey::containing(expense.date), store.expenses(), today);
        assert_eq!(grid.day(15).unwrap().expenses.len(), 1);

        assert!(store.delete(&expense.id).unwrap());

        let grid = build_month_grid(MonthKey::containing(expense.date), store.expenses(), today);
        let day = grid.day(15).unwrap();
        assert!(day.expenses.is_empty());
        assert_eq!(day.total, Money::zero());
    }
}
