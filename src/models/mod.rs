pub mod category;
pub mod question;

pub use category::Category;
pub use question::{
    CreateQuestionRequest, NewQuestion, PageQuery, Question, QuizCategoryRef, QuizRequest,
    SearchRequest,
};
