/// Logging port used by the use cases.
///
/// Adapters live in the infrastructure layer so the domain never depends on
/// a concrete logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
