use crate::types::ErrorVec;
use crate::validation::core::Validation;

pub struct Iter<'a, A> {
    inner: Option<&'a A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<'a, E, A> IntoIterator for &'a Validation<E, A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E, A> Validation<E, A> {
    /// Iterates over the valid value, if any.
    pub fn iter(&self) -> Iter<'_, A> {
        match self {
            Validation::Valid(a) => Iter { inner: Some(a) },
            Validation::Invalid { .. } => Iter { inner: None },
        }
    }

    pub fn iter_errors(&self) -> impl Iterator<Item = &E> {
        self.errors().iter()
    }
}

/// Collects outcomes, keeping every error from every invalid item.
///
/// # Examples
///
/// ```
/// use schema_rail::validation::Validation;
///
/// let items = vec![Validation::valid(1), Validation::invalid("bad"), Validation::invalid("worse")];
/// let collected: Validation<&str, Vec<i32>> = items.into_iter().collect();
/// assert_eq!(collected.into_errors().unwrap().len(), 2);
/// ```
impl<E, A, C> FromIterator<Validation<E, A>> for Validation<E, C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Validation<E, A>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors: ErrorVec<E> = ErrorVec::new();
        for item in iter {
            match item {
                Validation::Valid(v) => values.push(v),
                Validation::Invalid { errors: es, .. } => errors.extend(es),
            }
        }
        if errors.is_empty() {
            Validation::Valid(values.into_iter().collect())
        } else {
            Validation::Invalid { errors, partial: None }
        }
    }
}

impl<E, A, C> FromIterator<Result<A, E>> for Validation<E, C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(iter: I) -> Self {
        iter.into_iter().map(Validation::from_result).collect()
    }
}
