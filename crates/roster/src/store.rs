use gradtrack_core::{MasterRecord, Student};

/// Owned, single-writer container for the loaded roster.
///
/// Every mutation goes through this type on the calling thread; nothing
/// mutates it in the background, so replace/append/set semantics are the
/// whole transaction discipline.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Replace the whole roster (initial page load).
    pub fn replace(&mut self, students: Vec<Student>) {
        self.students = students;
    }

    /// Append a page (load-more). Order of arrival is preserved.
    pub fn append(&mut self, students: Vec<Student>) {
        self.students.extend(students);
    }

    /// Insert a single student, replacing any existing entry with the
    /// same UID (used when a student is fetched individually).
    pub fn upsert(&mut self, student: Student) {
        match self.students.iter_mut().find(|s| s.uid == student.uid) {
            Some(slot) => *slot = student,
            None => self.students.push(student),
        }
    }

    pub fn get(&self, uid: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.uid == uid)
    }

    /// Attach or overwrite a student's master record. Returns false when
    /// the student is not loaded.
    pub fn set_master(&mut self, uid: &str, master: MasterRecord) -> bool {
        match self.students.iter_mut().find(|s| s.uid == uid) {
            Some(student) => {
                student.master = Some(master);
                true
            }
            None => false,
        }
    }

    /// How many loaded students have a confirmed master record.
    pub fn with_master_count(&self) -> usize {
        self.students.iter().filter(|s| s.master.is_some()).count()
    }
}
