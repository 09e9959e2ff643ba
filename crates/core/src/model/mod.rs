mod ids;
mod question;
mod session;
mod topic;
mod topology;

pub use ids::{ParseSessionIdError, SessionId};
pub use question::{QuestionError, QuestionRecord};
pub use session::{AnswerOutcome, QuizSession, SessionError, SessionState};
pub use topic::{Domain, Topic, TopicError};
pub use topology::{Interface, Router, Topology};
