//! Lookups over nested domain records
//!
//! Records are hierarchical, so lookups walk the children of every record
//! with an explicit stack instead of indexing only the top level.

use crate::hierarchy::entity::DomainRecord;

/// Find the record whose fully-qualified name equals `fqn`, at any depth
pub fn find_by_fqn<'a>(records: &'a [DomainRecord], fqn: &str) -> Option<&'a DomainRecord> {
    let mut stack: Vec<&DomainRecord> = records.iter().rev().collect();

    while let Some(record) = stack.pop() {
        if record.fully_qualified_name == fqn {
            return Some(record);
        }
        stack.extend(record.children.iter().rev());
    }

    None
}

/// Every fully-qualified name in the records, depth-first, parents first
pub fn collect_fqns(records: &[DomainRecord]) -> Vec<String> {
    let mut fqns = Vec::new();
    let mut stack: Vec<&DomainRecord> = records.iter().rev().collect();

    while let Some(record) = stack.pop() {
        fqns.push(record.fully_qualified_name.clone());
        stack.extend(record.children.iter().rev());
    }

    fqns
}
