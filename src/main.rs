use std::path::PathBuf;

use iced::{Element, Subscription, Task, Theme};
use rfd::FileDialog;

mod analysis;
mod i18n;
mod state;
mod ui;

use analysis::{AnalysisError, Diagnosis, YieldEstimate};
use i18n::Language;
use state::form::{Field, YieldForm};
use state::intake::{self, ImageCandidate, ImageIntake, IntakeError};
use state::session::Session;

/// Screens the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Screen {
    #[default]
    Landing,
    DiseaseDetection,
    YieldPrediction,
}

/// One-line feedback banners, localized at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notice {
    UnsupportedFile,
    AnalysisDone,
    AnalysisFailed,
    PredictionDone,
    PredictionFailed,
}

/// Main application state
struct CassavaAi {
    /// Language and theme for this run
    session: Session,
    /// Which screen is visible
    screen: Screen,
    /// Disease detection photo pipeline
    intake: ImageIntake,
    /// Yield prediction form pipeline
    form: YieldForm,
    /// Feedback line for the visible screen
    notice: Option<Notice>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Switch to another screen
    Navigate(Screen),
    /// User picked a language from the header
    LanguageSelected(Language),
    /// User pressed the theme toggle
    ToggleTheme,
    /// Open the native file picker for a leaf photo
    BrowsePhoto,
    /// A file drag entered the window
    PhotoHovered,
    /// The drag left without dropping
    PhotoHoverLeft,
    /// One path from a window drop
    PhotoDropped(PathBuf),
    /// Drop the current photo selection
    ClearPhoto,
    /// Submit the selected photo for analysis
    AnalyzePhoto,
    /// Background analysis finished
    AnalysisFinished(u64, Result<Diagnosis, AnalysisError>),
    /// One form field was edited
    FieldEdited(Field, String),
    /// Validate and submit the yield form
    PredictYield,
    /// Background prediction finished
    PredictionFinished(u64, Result<YieldEstimate, AnalysisError>),
    /// Clear the whole form
    ResetForm,
}

impl CassavaAi {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🌱 CassavaAI started (language: en, theme: light)");

        (
            CassavaAi {
                session: Session::new(),
                screen: Screen::default(),
                intake: ImageIntake::new(),
                form: YieldForm::new(),
                notice: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(screen) => {
                self.screen = screen;
                self.notice = None;
                Task::none()
            }
            Message::LanguageSelected(language) => {
                self.session.set_language(language);
                Task::none()
            }
            Message::ToggleTheme => {
                self.session.toggle_theme();
                Task::none()
            }
            Message::BrowsePhoto => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Select a cassava leaf photo")
                    .add_filter("Images", &intake::IMAGE_EXTENSIONS)
                    .pick_file();

                if let Some(path) = picked {
                    self.offer_photo(path, false);
                }
                Task::none()
            }
            Message::PhotoHovered => {
                if self.screen == Screen::DiseaseDetection {
                    self.intake.drag_entered();
                }
                Task::none()
            }
            Message::PhotoHoverLeft => {
                self.intake.drag_left();
                Task::none()
            }
            Message::PhotoDropped(path) => {
                if self.screen == Screen::DiseaseDetection {
                    self.offer_photo(path, true);
                }
                Task::none()
            }
            Message::ClearPhoto => {
                self.intake.clear();
                self.notice = None;
                Task::none()
            }
            Message::AnalyzePhoto => match self.intake.begin_submit() {
                Ok((generation, path)) => {
                    self.notice = None;
                    println!("🔬 Analyzing {}", path.display());

                    Task::perform(analysis::analyze_image(path), move |result| {
                        Message::AnalysisFinished(generation, result)
                    })
                }
                Err(error) => {
                    // Guarded no-op: the button should not have fired
                    println!("⚠️  Submit refused: {error}");
                    Task::none()
                }
            },
            Message::AnalysisFinished(generation, result) => {
                match result {
                    Ok(diagnosis) => {
                        if self.intake.finish_submit(generation) {
                            // Placeholder backend: the payload is logged and dropped
                            println!("✅ Analysis complete: {}", diagnosis.label);
                            self.notice = Some(Notice::AnalysisDone);
                        }
                    }
                    Err(error) => {
                        if self.intake.fail_submit(generation) {
                            eprintln!("⚠️  Analysis failed: {error}");
                            self.notice = Some(Notice::AnalysisFailed);
                        }
                    }
                }
                Task::none()
            }
            Message::FieldEdited(field, value) => {
                self.form.set_field(field, value);
                Task::none()
            }
            Message::PredictYield => match self.form.begin_predict() {
                Some((generation, request)) => {
                    self.notice = None;
                    println!("🌾 Predicting yield for variety '{}'", request.variety);

                    Task::perform(analysis::predict_yield(request), move |result| {
                        Message::PredictionFinished(generation, result)
                    })
                }
                None => Task::none(),
            },
            Message::PredictionFinished(generation, result) => {
                if self.form.finish_predict(generation) {
                    match result {
                        Ok(estimate) => {
                            // Placeholder backend: the payload is logged and dropped
                            println!(
                                "✅ Prediction complete: {:.1} t/ha",
                                estimate.tonnes_per_hectare
                            );
                            self.notice = Some(Notice::PredictionDone);
                        }
                        Err(error) => {
                            eprintln!("⚠️  Prediction failed: {error}");
                            self.notice = Some(Notice::PredictionFailed);
                        }
                    }
                }
                Task::none()
            }
            Message::ResetForm => {
                self.form.reset();
                self.notice = None;
                Task::none()
            }
        }
    }

    /// Offer one path to the intake pipeline and surface the outcome
    fn offer_photo(&mut self, path: PathBuf, dropped: bool) {
        let candidate = match ImageCandidate::from_path(path) {
            Ok(candidate) => candidate,
            Err(error) => {
                eprintln!("⚠️  Could not read file: {error}");
                self.notice = Some(Notice::UnsupportedFile);
                return;
            }
        };

        let result = if dropped {
            self.intake.drop_file(candidate).map(|_| ())
        } else {
            self.intake.select_file(candidate)
        };

        match result {
            Ok(()) => self.notice = None,
            Err(IntakeError::UnsupportedFileType(name)) => {
                println!("⚠️  Rejected non-image file: {name}");
                self.notice = Some(Notice::UnsupportedFile);
            }
            Err(_) => {}
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match self.screen {
            Screen::Landing => ui::landing::view(&self.session),
            Screen::DiseaseDetection => ui::disease::view(&self.session, &self.intake, self.notice),
            Screen::YieldPrediction => {
                ui::yield_form::view(&self.session, &self.form, self.notice)
            }
        }
    }

    /// Surface window-level drag and drop events as messages
    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(iced::window::Event::FileHovered(_)) => {
                Some(Message::PhotoHovered)
            }
            iced::Event::Window(iced::window::Event::FilesHoveredLeft) => {
                Some(Message::PhotoHoverLeft)
            }
            iced::Event::Window(iced::window::Event::FileDropped(path)) => {
                Some(Message::PhotoDropped(path))
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.session.theme.to_iced()
    }
}

fn main() -> iced::Result {
    iced::application("CassavaAI", CassavaAi::update, CassavaAi::view)
        .theme(CassavaAi::theme)
        .subscription(CassavaAi::subscription)
        .centered()
        .run_with(CassavaAi::new)
}
