#[derive(Debug, Copy, Clone)]
pub struct MatchCase {
    name: &'static str,
    method: &'static str,
    path: &'static str,
}

impl MatchCase {
    pub const fn new(name: &'static str, method: &'static str, path: &'static str) -> Self {
        Self { name, method, path }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}
