//! Benchmark scenarios module

use chainhash::HashTable;
use rand::Rng;
use rand::rngs::StdRng;

/// Value type stored by every scenario
pub type Value = u64;

/// Scenario trait - defines a benchmark workload against one table
pub trait Scenario {
    /// Populate the table before timing starts
    fn prepare(&self, table: &mut HashTable<Value>);

    /// Execute one iteration, returning false when the key was not stored
    fn execute(&self, table: &mut HashTable<Value>, rng: &mut StdRng) -> bool;

    /// Scenario name
    fn name(&self) -> &str;
}

fn key_for(id: usize) -> String {
    format!("key-{}", id)
}

fn populate(table: &mut HashTable<Value>, keys: usize) {
    for id in 0..keys {
        table.set(key_for(id), id as Value);
    }
}

/// Point get scenario - single key lookup
pub struct PointGet {
    keys: usize,
}

impl PointGet {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for PointGet {
    fn prepare(&self, table: &mut HashTable<Value>) {
        populate(table, self.keys);
    }

    fn execute(&self, table: &mut HashTable<Value>, rng: &mut StdRng) -> bool {
        let id = rng.gen_range(0..self.keys);
        table.get(&key_for(id)).is_some()
    }

    fn name(&self) -> &str {
        "point_get"
    }
}

/// Read write scenario - nine lookups for every overwrite
pub struct ReadWrite {
    keys: usize,
}

impl ReadWrite {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for ReadWrite {
    fn prepare(&self, table: &mut HashTable<Value>) {
        populate(table, self.keys);
    }

    fn execute(&self, table: &mut HashTable<Value>, rng: &mut StdRng) -> bool {
        let id = rng.gen_range(0..self.keys);
        if rng.gen_ratio(1, 10) {
            table.set(key_for(id), rng.r#gen()).is_some()
        } else {
            table.has(&key_for(id))
        }
    }

    fn name(&self) -> &str {
        "read_write"
    }
}

/// Insert scenario - fresh keys only, the table keeps growing
pub struct Insert;

impl Insert {
    pub fn new() -> Self {
        Self
    }
}

impl Scenario for Insert {
    fn prepare(&self, _table: &mut HashTable<Value>) {}

    fn execute(&self, table: &mut HashTable<Value>, rng: &mut StdRng) -> bool {
        let id = table.length();
        table.set(key_for(id), rng.r#gen());
        true
    }

    fn name(&self) -> &str {
        "insert"
    }
}

/// Update scenario - overwrite existing keys in place
pub struct Update {
    keys: usize,
}

impl Update {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for Update {
    fn prepare(&self, table: &mut HashTable<Value>) {
        populate(table, self.keys);
    }

    fn execute(&self, table: &mut HashTable<Value>, rng: &mut StdRng) -> bool {
        let id = rng.gen_range(0..self.keys);
        match table.get_mut(&key_for(id)) {
            Some(value) => {
                *value = value.wrapping_add(1);
                true
            }
            None => false,
        }
    }

    fn name(&self) -> &str {
        "update"
    }
}

/// Delete scenario - remove a random key and put it back
pub struct Delete {
    keys: usize,
}

impl Delete {
    pub fn new(keys: usize) -> Self {
        Self { keys }
    }
}

impl Scenario for Delete {
    fn prepare(&self, table: &mut HashTable<Value>) {
        populate(table, self.keys);
    }

    fn execute(&self, table: &mut HashTable<Value>, rng: &mut StdRng) -> bool {
        let key = key_for(rng.gen_range(0..self.keys));
        match table.remove(&key) {
            Some(value) => {
                table.set(key, value);
                true
            }
            None => false,
        }
    }

    fn name(&self) -> &str {
        "delete"
    }
}

/// Build a scenario by name
pub fn by_name(name: &str, keys: usize) -> Option<Box<dyn Scenario>> {
    let scenario: Box<dyn Scenario> = match name {
        "point_get" => Box::new(PointGet::new(keys)),
        "read_write" => Box::new(ReadWrite::new(keys)),
        "insert" => Box::new(Insert::new()),
        "update" => Box::new(Update::new(keys)),
        "delete" => Box::new(Delete::new(keys)),
        _ => return None,
    };
    Some(scenario)
}
