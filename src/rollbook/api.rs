//! # API Facade
//!
//! [`RollbookApi`] is the single entry point for all operations: it owns
//! the dependency-injected stores plus the transient dashboard state (the
//! filter query and the page number) and wires the contracts between them:
//! the page resets to 1 whenever the filter changes, and clamps back to the
//! last page after a deletion.
//!
//! The facade is UI-agnostic: it never prints, never exits, and returns
//! structured `Result` types. Validation runs here, at the form boundary,
//! so field errors are returned to the caller and never escape as panics.

use rand::Rng;

use crate::error::Result;
use crate::model::{Course, Credential, Session, Student};
use crate::pagination::PageState;
use crate::search::{filter_students, FilterQuery};
use crate::seeder;
use crate::store::{AuthStore, StorageBackend, StudentStore};
use crate::validation::{validate_password, validate_student};

/// One rendered page of the filtered roster, plus the totals the UI shows.
#[derive(Debug, Clone)]
pub struct RosterPage {
    pub students: Vec<Student>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
}

pub struct RollbookApi<B: StorageBackend> {
    students: StudentStore<B>,
    auth: AuthStore<B>,
    query: FilterQuery,
    page: PageState,
}

impl<B: StorageBackend> RollbookApi<B> {
    pub fn new(students: StudentStore<B>, auth: AuthStore<B>) -> Self {
        Self {
            students,
            auth,
            query: FilterQuery::default(),
            page: PageState::default(),
        }
    }

    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page = PageState::new(size);
        self
    }

    /// Startup sequence: seed the default credential, load the student
    /// list (degrading a corrupt payload to empty), and pick up any
    /// persisted session.
    pub fn init(&mut self) -> Result<()> {
        self.auth.ensure_default()?;
        self.students.load_or_default();
        self.auth.restore()?;
        Ok(())
    }

    // --- Auth ---

    pub fn login(&mut self, username: &str, password: &str) -> Result<Session> {
        self.auth.login(username, password)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.auth.logout()
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth.is_logged_in()
    }

    pub fn current_user(&self) -> Option<&Credential> {
        self.auth.user()
    }

    /// Validate strength, then overwrite the stored password. When a
    /// session is live, the stored username must match it.
    pub fn change_password(&mut self, new_password: &str) -> Result<()> {
        validate_password(new_password)?;
        let expected = self.auth.session().map(|s| s.username.clone());
        self.auth.change_password(new_password, expected.as_deref())
    }

    // --- Dashboard state ---

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        self.page.reset_to_first_page();
    }

    pub fn set_course_filter(&mut self, course: Option<Course>) {
        self.query.course = course;
        self.page.reset_to_first_page();
    }

    pub fn set_page(&mut self, page: usize) {
        self.page.set_page(page);
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    /// Filter the live list with the current query and slice out the
    /// current page. Pure derived view: nothing here mutates the list.
    pub fn roster(&self) -> RosterPage {
        let filtered = filter_students(self.students.students(), &self.query);
        let page_slice = self.page.slice(&filtered);

        RosterPage {
            students: page_slice.iter().map(|s| (*s).clone()).collect(),
            page: self.page.page(),
            total_pages: self.page.total_pages(filtered.len()),
            filtered_count: filtered.len(),
            total_count: self.students.len(),
        }
    }

    // --- Mutations ---

    pub fn create_student(&mut self, draft: Student) -> Result<Student> {
        validate_student(&draft)?;
        self.students.create(draft)
    }

    pub fn update_student(&mut self, student: Student) -> Result<bool> {
        validate_student(&student)?;
        self.students.update(student)
    }

    /// Delete by id, then clamp the page so the view does not dangle past
    /// the new last page.
    pub fn delete_student(&mut self, id: u32) -> Result<bool> {
        let removed = self.students.delete(id)?;
        if removed {
            let filtered = filter_students(self.students.students(), &self.query);
            self.page.clamp_after_removal(filtered.len());
        }
        Ok(removed)
    }

    pub fn seed(&mut self, count: usize, rng: &mut impl Rng) -> Result<()> {
        seeder::seed_store(&mut self.students, count, rng)?;
        self.page.reset_to_first_page();
        Ok(())
    }

    pub fn students(&self) -> &StudentStore<B> {
        &self.students
    }
}
