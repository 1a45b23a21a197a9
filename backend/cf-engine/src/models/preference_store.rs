use std::collections::HashMap;
use std::hash::Hash;

/// Sparse user -> item -> score table.
///
/// A missing `(user, item)` pair means "unrated". It is never read back as a
/// zero score: lookups return `Option<f64>` so a real `0.0` rating and an
/// absent one stay distinguishable.
#[derive(Debug, Clone)]
pub struct PreferenceStore<U, I> {
    prefs: HashMap<U, HashMap<I, f64>>,
}

impl<U, I> Default for PreferenceStore<U, I> {
    fn default() -> Self {
        Self {
            prefs: HashMap::new(),
        }
    }
}

impl<U, I> PreferenceStore<U, I>
where
    U: Eq + Hash,
    I: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score, returning the one it replaced (if any).
    pub fn insert(&mut self, user: U, item: I, score: f64) -> Option<f64> {
        self.prefs.entry(user).or_default().insert(item, score)
    }

    pub fn score(&self, user: &U, item: &I) -> Option<f64> {
        self.prefs.get(user)?.get(item).copied()
    }

    /// All ratings of one user, `None` if the user is unknown.
    pub fn ratings(&self, user: &U) -> Option<&HashMap<I, f64>> {
        self.prefs.get(user)
    }

    pub fn contains_user(&self, user: &U) -> bool {
        self.prefs.contains_key(user)
    }

    pub fn has_rated(&self, user: &U, item: &I) -> bool {
        self.prefs
            .get(user)
            .is_some_and(|ratings| ratings.contains_key(item))
    }

    pub fn users(&self) -> impl Iterator<Item = &U> {
        self.prefs.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&U, &HashMap<I, f64>)> {
        self.prefs.iter()
    }

    pub fn user_count(&self) -> usize {
        self.prefs.len()
    }

    pub fn rating_count(&self) -> usize {
        self.prefs.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.prefs.is_empty()
    }

    /// Score pairs `(a's score, b's score)` over the items both users rated.
    ///
    /// Walks the smaller of the two rating maps. Unknown users share nothing.
    pub fn shared_scores(&self, a: &U, b: &U) -> Vec<(f64, f64)> {
        let (Some(ratings_a), Some(ratings_b)) = (self.prefs.get(a), self.prefs.get(b)) else {
            return Vec::new();
        };

        if ratings_a.len() <= ratings_b.len() {
            ratings_a
                .iter()
                .filter_map(|(item, &sa)| ratings_b.get(item).map(|&sb| (sa, sb)))
                .collect()
        } else {
            ratings_b
                .iter()
                .filter_map(|(item, &sb)| ratings_a.get(item).map(|&sa| (sa, sb)))
                .collect()
        }
    }
}

impl<U, I> FromIterator<(U, I, f64)> for PreferenceStore<U, I>
where
    U: Eq + Hash,
    I: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (U, I, f64)>>(iter: T) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<U, I> Extend<(U, I, f64)> for PreferenceStore<U, I>
where
    U: Eq + Hash,
    I: Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (U, I, f64)>>(&mut self, iter: T) {
        for (user, item, score) in iter {
            self.insert(user, item, score);
        }
    }
}
