use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepoListError {
    #[error("Please enter a repository name")]
    Empty,

    #[error("{0} is already in the list")]
    Duplicate(String),

    #[error("No repository at position {0}")]
    OutOfRange(usize),
}

/// Working copy of the featured repository names while they are edited.
///
/// Hand the finished list to `FetchService::commit_repo_list`, which also
/// invalidates the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoList {
    names: Vec<String>,
}

impl RepoList {
    pub fn from_names(names: &[String]) -> Self {
        let mut list = Self::default();
        for name in names {
            // Skip blanks and duplicates from hand-edited config
            let _ = list.add(name);
        }
        list
    }

    /// Append a repository name, returning the trimmed name that was added.
    pub fn add(&mut self, name: &str) -> Result<String, RepoListError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RepoListError::Empty);
        }
        if self.names.iter().any(|n| n == name) {
            return Err(RepoListError::Duplicate(name.to_string()));
        }
        self.names.push(name.to_string());
        Ok(name.to_string())
    }

    /// Remove and return the name at `index`.
    pub fn remove(&mut self, index: usize) -> Result<String, RepoListError> {
        if index >= self.names.len() {
            return Err(RepoListError::OutOfRange(index));
        }
        Ok(self.names.remove(index))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
