use clap::Parser;
use directories::ProjectDirs;
use rollbook::api::RollbookApi;
use rollbook::config::RollbookConfig;
use rollbook::error::{Result, RollbookError};
use rollbook::model::{Course, Student};
use rollbook::seeder::generate_students;
use rollbook::store::{AuthStore, FsBackend, StudentStore};
use std::path::PathBuf;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::render;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RollbookApi<FsBackend>,
    config: RollbookConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Login { username, password } => handle_login(&mut ctx, &username, &password),
        Commands::Logout => handle_logout(&mut ctx),
        Commands::Passwd { new_password } => handle_passwd(&mut ctx, &new_password),
        Commands::List {
            search,
            course,
            page,
        } => handle_list(&mut ctx, search, course, page),
        Commands::View { id } => handle_view(&ctx, id),
        Commands::Add {
            first,
            middle,
            last,
            birth_date,
            age,
            address,
            course,
            avatar,
        } => {
            let draft = Student::draft(
                first,
                middle,
                last,
                birth_date,
                age,
                address,
                course.parse::<Course>()?,
                avatar,
            );
            handle_add(&mut ctx, draft)
        }
        Commands::Edit {
            id,
            first,
            middle,
            last,
            birth_date,
            age,
            address,
            course,
            avatar,
        } => handle_edit(
            &mut ctx,
            id,
            EditFields {
                first,
                middle,
                last,
                birth_date,
                age,
                address,
                course,
                avatar,
            },
        ),
        Commands::Delete { id } => handle_delete(&mut ctx, id),
        Commands::Seed { count, dry_run } => handle_seed(&mut ctx, count, dry_run),
        Commands::Courses => {
            render::print_courses();
            Ok(())
        }
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "rollbook", "rollbook")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".rollbook")),
    };

    let config = RollbookConfig::load(&data_dir).unwrap_or_default();

    let students = StudentStore::with_backend(FsBackend::new(&data_dir));
    let auth = AuthStore::with_backend(FsBackend::new(&data_dir));
    let mut api = RollbookApi::new(students, auth).with_page_size(config.page_size);
    api.init()?;

    Ok(AppContext { api, config })
}

/// Roster commands sit behind the login: no session, no data.
fn require_login(ctx: &AppContext) -> Result<()> {
    if ctx.api.is_logged_in() {
        Ok(())
    } else {
        Err(RollbookError::NotLoggedIn)
    }
}

fn handle_login(ctx: &mut AppContext, username: &str, password: &str) -> Result<()> {
    ctx.api.login(username, password)?;
    let email = ctx
        .api
        .current_user()
        .map(|u| u.email.clone())
        .unwrap_or_default();
    render::print_success(&format!("Logged in as {} <{}>", username, email));
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    ctx.api.logout()?;
    render::print_success("Logged out");
    Ok(())
}

fn handle_passwd(ctx: &mut AppContext, new_password: &str) -> Result<()> {
    ctx.api.change_password(new_password)?;
    render::print_success("Password updated");
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    course: Option<String>,
    page: usize,
) -> Result<()> {
    require_login(ctx)?;

    if let Some(search) = search {
        ctx.api.set_search(search);
    }
    if let Some(course) = course {
        ctx.api.set_course_filter(Some(course.parse::<Course>()?));
    }
    ctx.api.set_page(page);

    render::print_roster(&ctx.api.roster());
    Ok(())
}

fn handle_view(ctx: &AppContext, id: u32) -> Result<()> {
    require_login(ctx)?;

    match ctx.api.students().get(id) {
        Some(student) => render::print_student(student),
        None => render::print_notice(&format!("No student with id {}", id)),
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, draft: Student) -> Result<()> {
    require_login(ctx)?;

    let stored = ctx.api.create_student(draft)?;
    render::print_success(&format!(
        "Student added (#{}): {}",
        stored.id,
        stored.full_name()
    ));
    Ok(())
}

struct EditFields {
    first: Option<String>,
    middle: Option<String>,
    last: Option<String>,
    birth_date: Option<String>,
    age: Option<String>,
    address: Option<String>,
    course: Option<String>,
    avatar: Option<String>,
}

fn handle_edit(ctx: &mut AppContext, id: u32, fields: EditFields) -> Result<()> {
    require_login(ctx)?;

    let Some(mut student) = ctx.api.students().get(id).cloned() else {
        render::print_notice(&format!("No student with id {}", id));
        return Ok(());
    };

    if let Some(first) = fields.first {
        student.first_name = first;
    }
    if let Some(middle) = fields.middle {
        // An empty --middle clears the field
        student.middle_name = if middle.is_empty() { None } else { Some(middle) };
    }
    if let Some(last) = fields.last {
        student.last_name = last;
    }
    if let Some(birth_date) = fields.birth_date {
        student.birth_date = birth_date;
    }
    if let Some(age) = fields.age {
        student.age = age;
    }
    if let Some(address) = fields.address {
        student.address = address;
    }
    if let Some(course) = fields.course {
        student.course = course.parse::<Course>()?;
    }
    if let Some(avatar) = fields.avatar {
        student.avatar = if avatar.is_empty() { None } else { Some(avatar) };
    }

    if ctx.api.update_student(student.clone())? {
        render::print_success(&format!(
            "Student updated (#{}): {}",
            student.id,
            student.full_name()
        ));
    } else {
        render::print_notice(&format!("No student with id {}", id));
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u32) -> Result<()> {
    require_login(ctx)?;

    let name = ctx.api.students().get(id).map(|s| s.full_name());
    if ctx.api.delete_student(id)? {
        render::print_success(&format!(
            "Student deleted (#{}): {}",
            id,
            name.unwrap_or_default()
        ));
    } else {
        render::print_notice(&format!("No student with id {}", id));
    }
    Ok(())
}

fn handle_seed(ctx: &mut AppContext, count: Option<usize>, dry_run: bool) -> Result<()> {
    require_login(ctx)?;

    let count = count.unwrap_or(ctx.config.seed_count);
    let mut rng = rand::thread_rng();

    if dry_run {
        let students = generate_students(count, &mut rng);
        render::print_students(&students);
        render::print_notice(&format!("Dry run: {} records not persisted", students.len()));
        return Ok(());
    }

    ctx.api.seed(count, &mut rng)?;
    render::print_success(&format!("Seeded {} students", count));
    Ok(())
}
