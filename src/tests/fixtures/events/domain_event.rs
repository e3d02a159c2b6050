#[derive(Debug, Clone, serde::Serialize)]
pub struct DomainEvent {
    pub name: &'static str,
}
