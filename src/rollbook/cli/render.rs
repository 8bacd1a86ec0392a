use console::style;
use rollbook::api::RosterPage;
use rollbook::model::{Course, Student};
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 28;
const COURSE_WIDTH: usize = 6;
const ADDRESS_WIDTH: usize = 34;

/// Roster table: id, name, age, course, address, then a page footer.
pub fn print_roster(roster: &RosterPage) {
    if roster.students.is_empty() {
        if roster.filtered_count == 0 {
            println!("No students found.");
        } else {
            println!(
                "Page {} is empty ({} students on {} pages).",
                roster.page, roster.filtered_count, roster.total_pages
            );
        }
        return;
    }

    print_students(&roster.students);

    println!(
        "{}",
        style(format!(
            "Page {} of {}  ·  {} of {} students",
            roster.page,
            roster.total_pages.max(1),
            roster.filtered_count,
            roster.total_count
        ))
        .dim()
    );
}

/// Bare table of records: id, name, age, course, address.
pub fn print_students(students: &[Student]) {
    println!(
        "{:>4}  {}  {:>3}  {}  {}",
        style("ID").bold(),
        style(pad("NAME", NAME_WIDTH)).bold(),
        style("AGE").bold(),
        style(pad("COURSE", COURSE_WIDTH)).bold(),
        style("ADDRESS").bold(),
    );

    for student in students {
        println!(
            "{:>4}  {}  {:>3}  {}  {}",
            student.id,
            pad(&truncate_text(&student.full_name(), NAME_WIDTH), NAME_WIDTH),
            student.age,
            pad(student.course.code(), COURSE_WIDTH),
            truncate_text(&student.address, ADDRESS_WIDTH),
        );
    }
}

/// Full detail view of one record.
pub fn print_student(student: &Student) {
    println!(
        "{} {}",
        style(format!("#{}", student.id)).yellow(),
        style(student.full_name()).bold()
    );
    println!("--------------------------------");
    println!("Initials:   {}", student.initials());
    println!("Born:       {}", format_date(&student.birth_date));
    println!("Age:        {}", student.age);
    println!("Course:     {} — {}", student.course.code(), student.course.label());
    println!("Address:    {}", student.address);
    if let Some(avatar) = &student.avatar {
        println!("Avatar:     {}", avatar);
    }
}

pub fn print_courses() {
    for course in Course::ALL {
        println!(
            "{}  {}",
            style(pad(course.code(), COURSE_WIDTH)).bold(),
            course.label()
        );
    }
}

pub fn print_success(message: &str) {
    println!("{}", style(message).green());
}

pub fn print_notice(message: &str) {
    println!("{}", style(message).yellow());
}

/// `YYYY-MM-DD` rendered as `Jan 1, 2000`; anything unparsable is shown
/// as stored.
pub fn format_date(date: &str) -> String {
    match chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Hard cap on display length, with a trailing ellipsis when truncated.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Right-pad to a display width, accounting for wide characters.
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_renders_english_short_month() {
        assert_eq!(format_date("2000-01-01"), "Jan 1, 2000");
        assert_eq!(format_date("1999-12-25"), "Dec 25, 1999");
    }

    #[test]
    fn format_date_passes_garbage_through() {
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_text("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn pad_accounts_for_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcd", 4), "abcd");
    }
}
