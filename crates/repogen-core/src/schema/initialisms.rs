use indexmap::IndexSet;

/// Initialisms recognized by default.
///
/// Only entries that are highly unlikely to be ordinary words belong here:
/// "ID" is fine, "AND" is not.
const COMMON: &[&str] = &[
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SSH", "TLS", "TTL", "UI", "UID",
    "UUID", "URI", "URL", "UTF8", "VM", "XML",
];

/// The set of initialisms the [`Normalizer`](super::Normalizer) keeps as a
/// single uppercase unit.
///
/// Entries are stored uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initialisms {
    set: IndexSet<String>,
}

impl Initialisms {
    /// The common Go initialisms (`ID`, `URL`, `HTTP`, ...).
    pub fn common() -> Initialisms {
        Initialisms::from_iter(COMMON.iter().copied())
    }

    pub fn empty() -> Initialisms {
        Initialisms {
            set: IndexSet::new(),
        }
    }

    pub fn insert(&mut self, initialism: impl AsRef<str>) -> bool {
        let initialism = initialism.as_ref().trim();
        if initialism.is_empty() {
            return false;
        }
        self.set.insert(initialism.to_uppercase())
    }

    /// `upper` must already be uppercased.
    pub fn contains(&self, upper: &str) -> bool {
        self.set.contains(upper)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.set.iter().map(String::as_str)
    }
}

impl Default for Initialisms {
    fn default() -> Self {
        Initialisms::common()
    }
}

impl<S: AsRef<str>> Extend<S> for Initialisms {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for initialism in iter {
            self.insert(initialism);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Initialisms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut ret = Initialisms::empty();
        ret.extend(iter);
        ret
    }
}
