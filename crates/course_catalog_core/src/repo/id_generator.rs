//! Identifier generation capability for new rows.

use uuid::Uuid;

/// Produces globally unique string ids for newly created rows.
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}

/// Default generator: random UUID v4 in hyphenated lowercase form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String,
{
    fn generate_id(&self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, UuidIdGenerator};
    use std::collections::HashSet;
    use uuid::Uuid;

    #[test]
    fn uuid_generator_emits_parseable_distinct_ids() {
        let ids: HashSet<String> = (0..64).map(|_| UuidIdGenerator.generate_id()).collect();
        assert_eq!(ids.len(), 64);
        for id in &ids {
            let parsed = Uuid::parse_str(id).unwrap();
            assert_eq!(parsed.get_version_num(), 4);
            assert_eq!(&parsed.to_string(), id);
        }
    }

    #[test]
    fn closures_act_as_generators() {
        let fixed = || "fixed-id".to_string();
        assert_eq!(fixed.generate_id(), "fixed-id");
    }
}
