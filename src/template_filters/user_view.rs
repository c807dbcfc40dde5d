use std::{fmt, sync::Arc};

use minijinja::value::{Object, Value};
use use_cases::permissions::{PolicySubject, TagHolder};

/// A user as handed to templates. Exposes `username` and `role` as
/// attributes; the filters reach the tags through [`PolicySubject`].
pub struct UserView {
    username: String,
    subject: Arc<dyn PolicySubject + Send + Sync>,
}

impl UserView {
    pub fn new(username: &str, subject: impl PolicySubject + Send + Sync + 'static) -> Self {
        Self {
            username: username.to_string(),
            subject: Arc::new(subject),
        }
    }

    pub fn into_value(self) -> Value {
        Value::from_object(self)
    }

    pub(crate) fn from_value(value: &Value) -> Option<&UserView> {
        value.downcast_object_ref::<UserView>()
    }
}

impl fmt::Debug for UserView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserView")
            .field("username", &self.username)
            .field("role", &self.subject.role())
            .finish()
    }
}

impl PolicySubject for UserView {
    fn role(&self) -> &str {
        self.subject.role()
    }

    fn tags(&self) -> Option<&dyn TagHolder> {
        self.subject.tags()
    }
}

impl Object for UserView {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        match key.as_str()? {
            "username" => Some(Value::from(self.username.as_str())),
            "role" => Some(Value::from(self.subject.role())),
            _ => None,
        }
    }
}
