//! Roster Store Module
//!
//! In-memory student collection with sequential id assignment.
//!
//! Lookups are linear scans over the insertion-ordered list; at the data
//! sizes this service handles, an index would buy nothing.

use crate::error::{Result, StudentError};
use crate::roster::Student;

// == Roster ==
/// Ordered in-memory collection of student records.
///
/// Ids are assigned by the roster as `max(existing ids) + 1`, or 1 when the
/// roster is empty, so every record carries a unique id. Insertion order is
/// preserved.
#[derive(Debug)]
pub struct Roster {
    /// Student records in insertion order
    students: Vec<Student>,
    /// Minimum grade counted as a pass
    passing_grade: f64,
}

impl Roster {
    // == Constructors ==
    /// Creates an empty roster with the given passing grade threshold.
    pub fn new(passing_grade: f64) -> Self {
        Self {
            students: Vec::new(),
            passing_grade,
        }
    }

    /// Creates a roster pre-populated with the startup seed records.
    ///
    /// The seed data is re-created on every process start; nothing persists
    /// across restarts.
    pub fn seeded(passing_grade: f64) -> Self {
        let mut roster = Self::new(passing_grade);
        roster.students = vec![
            Student::new(1, "Ahmed Sukary", 22, 89.5),
            Student::new(2, "Maram Halaaq", 17, 98.7),
            Student::new(3, "Ola Jaber", 21, 57.9),
            Student::new(4, "Alia Maher", 19, 44.4),
        ];
        roster
    }

    // == List All ==
    /// Returns every record in insertion order.
    pub fn all(&self) -> Vec<Student> {
        self.students.clone()
    }

    // == List Passed ==
    /// Returns the records whose grade meets the passing threshold,
    /// in insertion order. May be empty.
    pub fn passed(&self) -> Vec<Student> {
        self.students
            .iter()
            .filter(|student| student.grade >= self.passing_grade)
            .cloned()
            .collect()
    }

    // == Average Grade ==
    /// Returns the arithmetic mean of all grades.
    ///
    /// Fails with `NoStudents` when the roster is empty, so an empty roster
    /// can never produce a division by zero.
    pub fn average_grade(&self) -> Result<f64> {
        if self.students.is_empty() {
            return Err(StudentError::NoStudents);
        }

        let sum: f64 = self.students.iter().map(|student| student.grade).sum();
        Ok(sum / self.students.len() as f64)
    }

    // == Get ==
    /// Returns the record with the given id.
    ///
    /// # Arguments
    /// * `id` - The roster-assigned id to look up
    pub fn get(&self, id: u32) -> Result<Student> {
        self.students
            .iter()
            .find(|student| student.id == id)
            .cloned()
            .ok_or(StudentError::NotFound(id))
    }

    // == Add ==
    /// Appends a new record, assigning the next sequential id.
    ///
    /// Field validation happens before this is called; the roster only
    /// owns id assignment.
    ///
    /// # Arguments
    /// * `name` - Student name, already validated non-empty
    /// * `age` - Age in years, already validated non-negative
    /// * `grade` - Grade, already validated non-negative
    ///
    /// # Returns
    /// The stored record including its assigned id.
    pub fn add(&mut self, name: String, age: i32, grade: f64) -> Student {
        let student = Student::new(self.next_id(), name, age, grade);
        self.students.push(student.clone());
        student
    }

    // == Update ==
    /// Overwrites `name`, `age` and `grade` of the record with the given id.
    ///
    /// Full replacement of the three mutable fields; the id never changes.
    ///
    /// # Arguments
    /// * `id` - The roster-assigned id of the record to update
    /// * `name` - Replacement name, already validated non-empty
    /// * `age` - Replacement age, already validated non-negative
    /// * `grade` - Replacement grade, already validated non-negative
    ///
    /// # Returns
    /// The updated record, or `NotFound` when no record matches.
    pub fn update(&mut self, id: u32, name: String, age: i32, grade: f64) -> Result<Student> {
        let student = self
            .students
            .iter_mut()
            .find(|student| student.id == id)
            .ok_or(StudentError::NotFound(id))?;

        student.name = name;
        student.age = age;
        student.grade = grade;
        Ok(student.clone())
    }

    // == Remove ==
    /// Removes the record with the given id.
    ///
    /// # Arguments
    /// * `id` - The roster-assigned id of the record to remove
    pub fn remove(&mut self, id: u32) -> Result<()> {
        let position = self
            .students
            .iter()
            .position(|student| student.id == id)
            .ok_or(StudentError::NotFound(id))?;

        self.students.remove(position);
        Ok(())
    }

    // == Length ==
    /// Returns the current number of records.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    // == Is Empty ==
    /// Returns true if the roster holds no records.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    // == Next Id ==
    /// Next id to assign: one past the highest existing id, or 1 when empty.
    fn next_id(&self) -> u32 {
        self.students
            .iter()
            .map(|student| student.id)
            .max()
            .map_or(1, |max| max + 1)
    }
}
