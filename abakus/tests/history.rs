use abakus::{
    history::{HistoryStore, SharedHistory},
    Calculator, Strictness,
};
use std::{sync::Arc, thread};

#[test]
fn test_records_keep_insertion_order() {
    let history = SharedHistory::new();
    let calculator = Calculator::with_history(history.clone(), Strictness::Lenient);

    calculator.perform("add", 1.0, 2.0).unwrap();
    calculator.perform("subtract", 1.0, 2.0).unwrap();
    calculator.perform("multiply", 1.0, 2.0).unwrap();

    let results: Vec<_> = history.records().iter().map(|r| r.result()).collect();
    assert_eq!(results, vec![3.0, -1.0, 2.0]);
}

#[test]
fn test_store_append_and_clear() {
    let calculator = Calculator::new();
    calculator.perform("divide", 9.0, 3.0).unwrap();
    let record = calculator.last().unwrap();

    let mut store = HistoryStore::new();
    assert!(store.is_empty());
    assert!(store.last().is_none());

    store.append(record);
    store.append(record);
    assert_eq!(store.len(), 2);
    assert_eq!(store.last(), Some(&record));

    store.clear();
    assert!(store.is_empty());
    assert!(store.last().is_none());
}

#[test]
fn test_snapshot_is_detached() {
    let history = SharedHistory::new();
    let calculator = Calculator::with_history(history.clone(), Strictness::Lenient);
    calculator.perform("add", 2.0, 2.0).unwrap();

    let snapshot = history.get();
    history.clear();
    assert_eq!(snapshot.len(), 1);
    assert!(history.is_empty());
}

#[test]
fn test_concurrent_calculations() {
    const THREADS: usize = 8;
    const CALCULATIONS: usize = 100;

    let calculator = Arc::new(Calculator::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let calculator = calculator.clone();
            thread::spawn(move || {
                for n in 0..CALCULATIONS {
                    calculator.perform("add", n as f64, 1.0).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(calculator.history().len(), THREADS * CALCULATIONS);
}

#[test]
fn test_record_display_and_yaml() {
    let calculator = Calculator::new();
    calculator.perform("multiply", 3.0, 5.0).unwrap();
    let record = calculator.last().unwrap();

    assert_eq!(record.to_string(), "multiply 3 5 = 15");

    let yaml = serde_yaml::to_string(&record).unwrap();
    assert!(yaml.contains("operation: multiply"));
    assert!(yaml.contains("result: 15"));
}
