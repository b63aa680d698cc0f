//! Course roster models
//!
//! Courses and the people enrolled in them. Instructors and students are
//! identified within their course by email.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::entity::{require_email, require_max_len, require_non_empty, Entity, ValidationError};

/// A course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course identifier (e.g. "CS2103-2014S1")
    pub id: String,

    /// Course name
    pub name: String,

    /// Whether the course is archived
    #[serde(default)]
    pub is_archived: bool,

    /// When the course was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_archived: false,
            created_at: None,
        }
    }
}

impl Entity for Course {
    const CATEGORY: Category = Category::Course;

    fn identity(&self) -> String {
        self.id.clone()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("id", &self.id)?;
        require_max_len("id", &self.id, 40)?;
        if self.id.contains(char::is_whitespace) {
            return Err(ValidationError::new("id", "cannot contain whitespace"));
        }
        require_non_empty("name", &self.name)?;
        require_max_len("name", &self.name, 64)?;
        Ok(())
    }
}

/// An instructor of a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    /// Login identifier of the linked account, if any
    #[serde(default)]
    pub google_id: Option<String>,

    pub course_id: String,
    pub name: String,
    pub email: String,

    /// Role within the course (e.g. "Co-owner")
    #[serde(default)]
    pub role: Option<String>,
}

impl Entity for Instructor {
    const CATEGORY: Category = Category::Instructor;

    fn identity(&self) -> String {
        format!("{}/{}", self.course_id, self.email)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("courseId", &self.course_id)?;
        require_non_empty("name", &self.name)?;
        require_email("email", &self.email)?;
        Ok(())
    }
}

/// A student enrolled in a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Login identifier of the linked account, if any
    #[serde(default)]
    pub google_id: Option<String>,

    pub email: String,
    pub course: String,
    pub name: String,

    #[serde(default)]
    pub comments: String,

    #[serde(default)]
    pub team: String,

    #[serde(default)]
    pub section: Option<String>,
}

impl Entity for Student {
    const CATEGORY: Category = Category::Student;

    fn identity(&self) -> String {
        format!("{}/{}", self.course, self.email)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("course", &self.course)?;
        require_non_empty("name", &self.name)?;
        require_email("email", &self.email)?;
        require_max_len("team", &self.team, 60)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_validation() {
        assert!(Course::new("CS101", "Programming").validate().is_ok());
        assert!(Course::new("CS 101", "Programming").validate().is_err());
        assert!(Course::new("CS101", "").validate().is_err());
    }

    #[test]
    fn test_student_identity_is_scoped_by_course() {
        let json = r#"{"email": "s1@example.com", "course": "CS101", "name": "S One"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.identity(), "CS101/s1@example.com");
        assert!(student.validate().is_ok());
    }

    #[test]
    fn test_instructor_requires_email() {
        let json = r#"{"courseId": "CS101", "name": "Prof", "email": "prof"}"#;
        let instructor: Instructor = serde_json::from_str(json).unwrap();
        assert_eq!(instructor.validate().unwrap_err().field, "email");
    }
}
