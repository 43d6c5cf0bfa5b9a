/// Author of a post. Embedded in the post, it has no identity of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub full_name: String,
    pub user_name: String,
    pub email: String,
}

impl Author {
    pub fn new(
        full_name: impl Into<String>,
        user_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            user_name: user_name.into(),
            email: email.into(),
        }
    }
}
