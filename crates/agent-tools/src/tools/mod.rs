//! Built-in tool implementations.

mod exchange_rate;
mod general_question;
mod weather;

pub use exchange_rate::{ExchangeRate, ExchangeRateConfig, DEFAULT_EXCHANGE_URL};
pub use general_question::{GeneralQuestion, GeneralQuestionConfig, DEFAULT_ANSWER_MODEL};
pub use weather::{Weather, WeatherConfig, DEFAULT_OPENWEATHER_URL};
