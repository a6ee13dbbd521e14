use crate::language::Language;
use crate::page::TranslatableElement;

pub struct LanguageState {
    pub(in crate::app) current: Language,
    pub(in crate::app) elements: Vec<TranslatableElement>,
}
