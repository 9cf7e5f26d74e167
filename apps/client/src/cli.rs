use clap::{Args, Parser, Subcommand};

use crate::ports::{IdInputPort, ProfileField, ProfileFormPort};

#[derive(Parser)]
#[command(name = "career-client")]
#[command(about = "Client for the career guidance service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a student profile
    Submit(ProfileArgs),
    /// List all student profiles
    List,
    /// Show one stored profile
    Show(IdArgs),
    /// Replace a stored profile with new values
    Update(UpdateArgs),
    /// Generate career recommendations for a profile
    Recommend(IdArgs),
    /// Rule-based recommendations for a profile
    Basic(IdArgs),
    /// List education streams
    Streams,
    /// List education streams for one level (e.g. 12th, Graduate)
    StreamsByLevel(LevelArgs),
    /// List the common entrance exams for a stream
    Exams(StreamArgs),
    /// Check that the service is up
    Health,
}

/// Profile form fields. Values are taken as typed; list fields are comma-separated.
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    /// Parsed as a leading integer; anything else is sent as null
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub age: String,
    #[arg(long, default_value = "")]
    pub current_class: String,
    #[arg(long, default_value = "")]
    pub current_stream: String,
    /// Comma-separated
    #[arg(long, default_value = "")]
    pub subjects: String,
    /// Comma-separated
    #[arg(long, default_value = "")]
    pub interests: String,
    /// Comma-separated
    #[arg(long, default_value = "")]
    pub skills: String,
    /// Comma-separated
    #[arg(long, default_value = "")]
    pub career_aspirations: String,
    #[arg(long, default_value = "")]
    pub academic_performance: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "")]
    pub family_background: String,
    #[arg(long, default_value = "")]
    pub economic_status: String,
}

impl ProfileFormPort for ProfileArgs {
    fn value(&self, field: ProfileField) -> String {
        let value = match field {
            ProfileField::Name => &self.name,
            ProfileField::Age => &self.age,
            ProfileField::CurrentClass => &self.current_class,
            ProfileField::CurrentStream => &self.current_stream,
            ProfileField::Subjects => &self.subjects,
            ProfileField::Interests => &self.interests,
            ProfileField::Skills => &self.skills,
            ProfileField::CareerAspirations => &self.career_aspirations,
            ProfileField::AcademicPerformance => &self.academic_performance,
            ProfileField::Location => &self.location,
            ProfileField::FamilyBackground => &self.family_background,
            ProfileField::EconomicStatus => &self.economic_status,
        };
        value.clone()
    }
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Profile identifier
    pub id: String,
}

impl IdInputPort for IdArgs {
    fn profile_id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Profile identifier
    pub id: String,
    #[command(flatten)]
    pub profile: ProfileArgs,
}

impl IdInputPort for UpdateArgs {
    fn profile_id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Args, Debug)]
pub struct LevelArgs {
    /// Education level
    pub level: String,
}

#[derive(Args, Debug)]
pub struct StreamArgs {
    /// Stream name, as listed by `streams`
    pub stream_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Profile;

    #[test]
    fn test_submit_flags_map_to_profile_fields() {
        let cli = Cli::try_parse_from([
            "career-client",
            "submit",
            "--name",
            "Ana",
            "--age",
            "16",
            "--current-stream",
            "Science",
            "--subjects",
            "Physics, Maths",
            "--career-aspirations",
            "Engineer,",
        ])
        .unwrap();

        let Commands::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        let profile = Profile::from_form(&args);

        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.age, Some(16));
        assert_eq!(profile.current_stream, "Science");
        assert_eq!(profile.subjects, vec!["Physics", " Maths"]);
        assert_eq!(profile.career_aspirations, vec!["Engineer", ""]);
        assert_eq!(profile.location, "");
    }

    #[test]
    fn test_recommend_takes_positional_id() {
        let cli = Cli::try_parse_from(["career-client", "recommend", "42"]).unwrap();
        let Commands::Recommend(args) = cli.command else {
            panic!("expected recommend");
        };
        assert_eq!(args.profile_id(), "42");
    }

    #[test]
    fn test_update_takes_id_and_profile_flags() {
        let cli = Cli::try_parse_from([
            "career-client",
            "update",
            "7",
            "--name",
            "Ravi",
            "--age",
            "-1",
        ])
        .unwrap();
        let Commands::Update(args) = cli.command else {
            panic!("expected update");
        };
        assert_eq!(args.profile_id(), "7");
        let profile = Profile::from_form(&args.profile);
        assert_eq!(profile.name, "Ravi");
        assert_eq!(profile.age, Some(-1));
    }

    #[test]
    fn test_exams_and_level_subcommands() {
        let cli = Cli::try_parse_from(["career-client", "exams", "Science (PCM)"]).unwrap();
        assert!(matches!(cli.command, Commands::Exams(ref a) if a.stream_name == "Science (PCM)"));

        let cli = Cli::try_parse_from(["career-client", "streams-by-level", "12th"]).unwrap();
        assert!(matches!(cli.command, Commands::StreamsByLevel(ref a) if a.level == "12th"));
    }
}
