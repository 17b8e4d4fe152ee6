use uuid::Uuid;

/// Source of fresh report identifiers.
///
/// Allocation may fail; callers must surface that as a server error and
/// persist nothing for the request.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> anyhow::Result<Uuid>;
}

/// Random v4 identifiers.
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> anyhow::Result<Uuid> {
        Ok(Uuid::new_v4())
    }
}
