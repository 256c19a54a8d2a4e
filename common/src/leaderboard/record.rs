#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRecord {
    pub id: i64,
    pub name: String,
    pub score: u32,
}
