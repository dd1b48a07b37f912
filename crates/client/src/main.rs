//! syllabus-client CLI entry point.

use clap::Parser;
use syllabus_client::cli::coursework::CourseworkAction;
use syllabus_client::cli::courses::CoursesAction;
use syllabus_client::cli::enrollments::EnrollmentsAction;
use syllabus_client::cli::events::EventsAction;
use syllabus_client::cli::{Cli, Commands, OutputFormat};
use syllabus_client::client::courses::CreateCourseRequest;
use syllabus_client::client::coursework::CreateCourseworkRequest;
use syllabus_client::client::events::{ListEventsQuery, UpcomingQuery};
use syllabus_client::client::SyllabusClient;
use syllabus_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = SyllabusClient::new(&cli.base_url);

    match cli.command {
        Commands::Courses(courses_cmd) => match courses_cmd.action {
            CoursesAction::List => {
                let courses = client.list_courses().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&courses, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_courses(&courses)),
                }
            }
            CoursesAction::Create {
                name,
                code,
                id,
                instructor,
                term_start,
                term_end,
            } => {
                let course = client
                    .create_course(CreateCourseRequest {
                        id,
                        name,
                        course_code: code,
                        instructor,
                        term_start,
                        term_end,
                    })
                    .await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&course, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Created:\n{}", pretty::format_course(&course))
                    }
                }
            }
            CoursesAction::Get { id } => {
                let course = client.get_course(&id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&course, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_course(&course)),
                }
            }
            CoursesAction::Delete { id } => {
                client.delete_course(&id).await?;
                if !cli.quiet {
                    println!("Deleted course {}", id);
                }
            }
        },
        Commands::Coursework(coursework_cmd) => match coursework_cmd.action {
            CourseworkAction::List { course_id } => {
                let items = client.list_coursework(&course_id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&items, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_coursework_list(&items)),
                }
            }
            CourseworkAction::Create {
                course_id,
                kind,
                title,
                date,
                time,
                end_time,
                location,
                points,
                priority,
                time_limit,
                id,
            } => {
                let item = client
                    .create_coursework(
                        &course_id,
                        CreateCourseworkRequest {
                            kind: kind.into(),
                            id,
                            title,
                            date: date.to_string(),
                            time,
                            end_time,
                            location,
                            points_possible: points,
                            priority: priority.map(Into::into),
                            time_limit_minutes: time_limit,
                        },
                    )
                    .await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Created:\n{}", pretty::format_coursework(&item))
                    }
                }
            }
            CourseworkAction::Get { id } => {
                let item = client.get_coursework(&id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_coursework(&item)),
                }
            }
            CourseworkAction::Delete { id } => {
                client.delete_coursework(&id).await?;
                if !cli.quiet {
                    println!("Deleted coursework {}", id);
                }
            }
        },
        Commands::Events(events_cmd) => match events_cmd.action {
            EventsAction::List {
                start,
                end,
                courses,
                viewer,
            } => {
                let events = match viewer {
                    Some(viewer) => client.list_viewer_events(&viewer, start, end).await?,
                    None => {
                        client
                            .list_events(&ListEventsQuery::new(start, end, &courses))
                            .await?
                    }
                };
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&events, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_events(&events)),
                }
            }
            EventsAction::Days {
                start,
                end,
                courses,
            } => {
                let days = client
                    .list_event_days(&ListEventsQuery::new(start, end, &courses))
                    .await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&days, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_day_agendas(&days)),
                }
            }
            EventsAction::Upcoming {
                days,
                limit,
                courses,
            } => {
                let events = client
                    .upcoming_events(&UpcomingQuery::new(days, limit, &courses))
                    .await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&events, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_events(&events)),
                }
            }
        },
        Commands::Enrollments(enrollments_cmd) => {
            let enrollments = match enrollments_cmd.action {
                EnrollmentsAction::Get { viewer } => client.get_enrollments(&viewer).await?,
                EnrollmentsAction::Set { viewer, courses } => {
                    client.set_enrollments(&viewer, &courses).await?
                }
                EnrollmentsAction::Add { viewer, course_id } => {
                    client.enroll(&viewer, &course_id).await?
                }
                EnrollmentsAction::Remove { viewer, course_id } => {
                    client.unenroll(&viewer, &course_id).await?
                }
            };
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&enrollments, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_enrollments(&enrollments)),
            }
        }
        Commands::Health => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => println!(
                    "Health:\n  Status: {}\n  Courses: {}",
                    health.status, health.courses
                ),
            }
        }
    }

    Ok(())
}
