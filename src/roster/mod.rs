//! Roster — an ordered, singly-linked chain of [`Student`] records.
//!
//! ```text
//! head ─► [Amy] ─► [Bob] ─► [Cy] ─► ∅
//!                            tail
//! ```
//!
//! Nodes are owned through `head` and each node's `next`; the tail is
//! whichever node has no `next`. Appends walk to that empty slot, so they
//! are O(n) like lookup and removal. Lookup and removal are linear scans
//! keyed on email, first match in chain order.
//!
//! Persistence (`save_to_json` / `load_from_json`) lives in [`persist`];
//! the byte-level read/write seam lives in [`storage`].

pub mod persist;
pub mod storage;
pub mod student;

pub use storage::{FsStorage, MemStorage, Storage};
pub use student::Student;

use std::fmt;

struct Node {
    student: Student,
    next: Option<Box<Node>>,
}

/// Ordered collection of students, in insertion order unless removed.
pub struct Roster {
    head: Option<Box<Node>>,
    /// Number of nodes reachable from `head`.
    len: usize,
}

impl Roster {
    /// Create an empty roster.
    pub const fn new() -> Self {
        Self {
            head: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// First student in chain order.
    pub fn head(&self) -> Option<&Student> {
        self.head.as_ref().map(|node| &node.student)
    }

    /// Last student in chain order.
    pub fn tail(&self) -> Option<&Student> {
        self.iter().last()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Append `student` after the current tail.
    ///
    /// Duplicate emails are accepted; lookups and removals then see the
    /// earliest one first.
    pub fn add_student(&mut self, student: Student) {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Box::new(Node { student, next: None }));
        self.len += 1;
    }

    /// Unlink the first student whose email equals `email` exactly.
    ///
    /// Returns the removed record, or `None` (and changes nothing) when no
    /// student matches.
    pub fn remove_student(&mut self, email: &str) -> Option<Student> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.student.email() != email) {
            cursor = &mut cursor.as_mut()?.next;
        }

        // Splice the successor into the slot; a removed tail leaves `None`.
        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        self.len -= 1;
        Some(removed.student)
    }

    /// First student whose email equals `email` exactly.
    pub fn find_student(&self, email: &str) -> Option<&Student> {
        self.iter().find(|s| s.email() == email)
    }

    /// Names in chain order with all whitespace stripped, joined by `", "`.
    ///
    /// `"Jane Doe"` and `"John Doe"` render as `"JaneDoe, JohnDoe"`; an
    /// empty roster renders as `""`. Whitespace is the ECMAScript `\s` set:
    /// Unicode `White_Space` minus U+0085, plus U+FEFF.
    pub fn display_students(&self) -> String {
        self.iter()
            .map(|s| s.name().chars().filter(|&c| !is_name_space(c)).collect::<String>())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Students with exactly this specialization, sorted by name.
    pub fn filter_by_specialization(&self, specialization: &str) -> Vec<&Student> {
        self.sort_students_by_name()
            .into_iter()
            .filter(|s| s.specialization() == specialization)
            .collect()
    }

    /// Students whose year is at least `min_age`, sorted by name.
    pub fn filter_by_min_age(&self, min_age: i64) -> Vec<&Student> {
        self.sort_students_by_name()
            .into_iter()
            .filter(|s| s.year() >= min_age)
            .collect()
    }

    /// Snapshot of every student, stably sorted by name in Unicode code
    /// point order. The chain itself is untouched.
    fn sort_students_by_name(&self) -> Vec<&Student> {
        let mut students: Vec<&Student> = self.iter().collect();
        students.sort_by(|a, b| a.name().cmp(b.name()));
        students
    }

    /// Drop the whole chain at once.
    fn clear(&mut self) {
        *self = Self::new();
    }
}

fn is_name_space(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Roster {
    fn drop(&mut self) {
        // Unlink node by node; the default recursive drop of a long
        // `Box<Node>` chain can exhaust the stack.
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl fmt::Debug for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Extend<Student> for Roster {
    fn extend<I: IntoIterator<Item = Student>>(&mut self, iter: I) {
        for student in iter {
            self.add_student(student);
        }
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        let mut roster = Self::new();
        roster.extend(iter);
        roster
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Roster`] in chain order.
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Student;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.student
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, year: i64, spec: &str) -> Student {
        let email = format!("{}@x", name.to_lowercase().replace(' ', "."));
        Student::new(name, year, email, spec)
    }

    /// Walk the chain and check `len`, `head`/`tail` agreement and that
    /// `tail` is the node reached last.
    fn assert_chain_consistent(roster: &Roster) {
        let mut count = 0;
        let mut last = None;
        let mut cursor = roster.head.as_deref();
        while let Some(node) = cursor {
            count += 1;
            last = Some(&node.student);
            cursor = node.next.as_deref();
        }
        assert_eq!(count, roster.len, "len must match reachable nodes");
        assert_eq!(roster.head().is_none(), roster.tail().is_none());
        assert_eq!(roster.len == 0, roster.head.is_none());
        assert_eq!(last.map(|s| s as *const Student), roster.tail().map(|s| s as *const Student));
    }

    fn emails(roster: &Roster) -> Vec<&str> {
        roster.iter().map(|s| s.email()).collect()
    }

    #[test]
    fn new_roster_is_empty() {
        let roster = Roster::new();
        assert_eq!(roster.len(), 0);
        assert!(roster.is_empty());
        assert!(roster.head().is_none());
        assert!(roster.tail().is_none());
        assert_chain_consistent(&roster);
    }

    #[test]
    fn add_appends_in_call_order() {
        let mut roster = Roster::new();
        roster.add_student(student("Jane Doe", 20, "CS"));
        assert_eq!(roster.head(), roster.tail());
        roster.add_student(student("John Doe", 21, "EE"));
        roster.add_student(student("Cy", 19, "CS"));

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.head().unwrap().name(), "Jane Doe");
        assert_eq!(roster.tail().unwrap().name(), "Cy");
        assert_eq!(roster.display_students(), "JaneDoe, JohnDoe, Cy");
        assert_chain_consistent(&roster);
    }

    #[test]
    fn display_strips_every_kind_of_whitespace() {
        let roster: Roster = [
            Student::new("  Mary\tAnn  Lee ", 20, "m@x", "CS"),
            Student::new("Bo\nB", 20, "b@x", "CS"),
        ]
        .into_iter()
        .collect();
        assert_eq!(roster.display_students(), "MaryAnnLee, BoB");
    }

    #[test]
    fn display_whitespace_set_matches_regex_class() {
        // U+0085 (NEL) is kept, U+FEFF and U+00A0 are stripped.
        let roster: Roster = [Student::new("A\u{85}B\u{feff}C\u{a0}D\u{3000}E", 20, "a@x", "CS")]
            .into_iter()
            .collect();
        assert_eq!(roster.display_students(), "A\u{85}BCDE");
    }

    #[test]
    fn display_of_empty_roster_is_empty_string() {
        assert_eq!(Roster::new().display_students(), "");
    }

    #[test]
    fn remove_head_of_many() {
        let mut roster: Roster = ["Amy", "Bob", "Cy"].map(|n| student(n, 20, "CS")).into_iter().collect();
        let removed = roster.remove_student("amy@x").unwrap();
        assert_eq!(removed.name(), "Amy");
        assert_eq!(emails(&roster), ["bob@x", "cy@x"]);
        assert_eq!(roster.head().unwrap().name(), "Bob");
        assert_eq!(roster.tail().unwrap().name(), "Cy");
        assert_chain_consistent(&roster);
    }

    #[test]
    fn remove_interior_node() {
        let mut roster: Roster = ["Amy", "Bob", "Cy"].map(|n| student(n, 20, "CS")).into_iter().collect();
        roster.remove_student("bob@x").unwrap();
        assert_eq!(emails(&roster), ["amy@x", "cy@x"]);
        assert_eq!(roster.tail().unwrap().name(), "Cy");
        assert_chain_consistent(&roster);
    }

    #[test]
    fn remove_tail_moves_tail_to_predecessor() {
        let mut roster: Roster = ["Amy", "Bob", "Cy"].map(|n| student(n, 20, "CS")).into_iter().collect();
        roster.remove_student("cy@x").unwrap();
        assert_eq!(roster.tail().unwrap().name(), "Bob");
        assert_chain_consistent(&roster);

        // Appending after a tail removal must link from the new tail.
        roster.add_student(student("Dee", 20, "CS"));
        assert_eq!(emails(&roster), ["amy@x", "bob@x", "dee@x"]);
        assert_chain_consistent(&roster);
    }

    #[test]
    fn remove_head_then_add_links_after_last() {
        let mut roster = Roster::new();
        roster.add_student(student("Amy", 20, "CS"));
        roster.add_student(student("Bob", 20, "CS"));
        roster.remove_student("amy@x").unwrap();
        roster.add_student(student("Cy", 20, "CS"));

        assert_eq!(emails(&roster), ["bob@x", "cy@x"]);
        assert_eq!(roster.head().unwrap().name(), "Bob");
        assert_eq!(roster.tail().unwrap().name(), "Cy");
        assert_chain_consistent(&roster);

        roster.remove_student("cy@x").unwrap();
        roster.add_student(student("Dee", 20, "CS"));
        assert_eq!(emails(&roster), ["bob@x", "dee@x"]);
        assert_chain_consistent(&roster);
    }

    #[test]
    fn remove_sole_element_empties_head_and_tail() {
        let mut roster = Roster::new();
        roster.add_student(student("Amy", 20, "CS"));
        roster.remove_student("amy@x").unwrap();
        assert!(roster.is_empty());
        assert!(roster.head().is_none());
        assert!(roster.tail().is_none());
        assert_chain_consistent(&roster);

        roster.add_student(student("Bob", 21, "EE"));
        assert_eq!(roster.head(), roster.tail());
        assert_eq!(roster.len(), 1);
        assert_chain_consistent(&roster);
    }

    #[test]
    fn remove_missing_email_is_noop() {
        let mut roster: Roster = ["Amy", "Bob"].map(|n| student(n, 20, "CS")).into_iter().collect();
        assert!(roster.remove_student("nobody@x").is_none());
        assert_eq!(roster.len(), 2);
        assert_eq!(emails(&roster), ["amy@x", "bob@x"]);
        assert_chain_consistent(&roster);

        let mut empty = Roster::new();
        assert!(empty.remove_student("amy@x").is_none());
        assert_chain_consistent(&empty);
    }

    #[test]
    fn email_match_is_case_sensitive() {
        let mut roster = Roster::new();
        roster.add_student(Student::new("Amy", 20, "Amy@X", "CS"));
        assert!(roster.find_student("amy@x").is_none());
        assert!(roster.remove_student("amy@x").is_none());
        assert!(roster.find_student("Amy@X").is_some());
    }

    #[test]
    fn add_then_remove_restores_length() {
        let mut roster: Roster = ["Amy", "Bob"].map(|n| student(n, 20, "CS")).into_iter().collect();
        let before = roster.len();
        roster.add_student(student("Cy", 22, "EE"));
        roster.remove_student("cy@x");
        assert_eq!(roster.len(), before);
        assert!(roster.find_student("cy@x").is_none());
        assert_eq!(roster.display_students(), "Amy, Bob");
    }

    #[test]
    fn duplicate_emails_resolve_to_first_in_chain() {
        let mut roster = Roster::new();
        roster.add_student(Student::new("First", 20, "dup@x", "CS"));
        roster.add_student(Student::new("Second", 21, "dup@x", "EE"));
        assert_eq!(roster.find_student("dup@x").unwrap().name(), "First");

        assert_eq!(roster.remove_student("dup@x").unwrap().name(), "First");
        assert_eq!(roster.find_student("dup@x").unwrap().name(), "Second");
        assert_chain_consistent(&roster);
    }

    #[test]
    fn find_on_empty_roster_is_none() {
        assert!(Roster::new().find_student("anyone@x").is_none());
    }

    #[test]
    fn filter_by_specialization_sorts_by_name() {
        let mut roster = Roster::new();
        roster.add_student(Student::new("Bob", 20, "bob@x", "EE"));
        roster.add_student(Student::new("Amy", 21, "amy@x", "CS"));
        roster.add_student(Student::new("Cy", 19, "cy@x", "CS"));

        let names: Vec<_> = roster.filter_by_specialization("CS").iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Amy", "Cy"]);
        assert!(roster.filter_by_specialization("cs").is_empty());
        // Chain order is untouched by the sort.
        assert_eq!(roster.display_students(), "Bob, Amy, Cy");
    }

    #[test]
    fn filter_by_min_age_is_inclusive_and_sorted() {
        let mut roster = Roster::new();
        roster.add_student(Student::new("Zed", 22, "zed@x", "CS"));
        roster.add_student(Student::new("Amy", 20, "amy@x", "EE"));
        roster.add_student(Student::new("Moe", 19, "moe@x", "CS"));

        let names: Vec<_> = roster.filter_by_min_age(20).iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Amy", "Zed"]);
        assert!(roster.filter_by_min_age(23).is_empty());
        assert_eq!(roster.filter_by_min_age(i64::MIN).len(), 3);
    }

    #[test]
    fn name_sort_is_stable_and_code_point_ordered() {
        let mut roster = Roster::new();
        roster.add_student(Student::new("bob", 20, "lower@x", "CS"));
        roster.add_student(Student::new("Bob", 20, "first@x", "CS"));
        roster.add_student(Student::new("Bob", 20, "second@x", "CS"));

        let sorted: Vec<_> = roster.filter_by_specialization("CS").iter().map(|s| s.email()).collect();
        // 'B' < 'b' in code point order; equal names keep chain order.
        assert_eq!(sorted, ["first@x", "second@x", "lower@x"]);
    }

    #[test]
    fn clear_discards_whole_chain() {
        let mut roster: Roster = ["Amy", "Bob"].map(|n| student(n, 20, "CS")).into_iter().collect();
        roster.clear();
        assert!(roster.is_empty());
        assert_chain_consistent(&roster);
        roster.add_student(student("Cy", 20, "CS"));
        assert_eq!(emails(&roster), ["cy@x"]);
        assert_chain_consistent(&roster);
    }

    #[test]
    fn long_chain_drops_without_overflow() {
        let roster: Roster = (0..200_000)
            .map(|i| Student::new(format!("S{i}"), 20, format!("s{i}@x"), "CS"))
            .collect();
        assert_eq!(roster.len(), 200_000);
        assert_eq!(roster.iter().len(), 200_000);
        drop(roster);
    }

    #[test]
    fn debug_lists_students() {
        let roster: Roster = [student("Amy", 20, "CS")].into_iter().collect();
        assert!(format!("{roster:?}").contains("amy@x"));
    }
}
