//! Russian catalog.

use super::LabelKey;
use crate::validation::MessageKey;

pub(super) fn message(key: MessageKey) -> &'static str {
    match key {
        MessageKey::TitleRequired => "Наименование организации обязательно",
        MessageKey::AddressRequired => "Наименование организации обязательно",
        MessageKey::PhoneRequired => "Телефон обязателен",
        MessageKey::PhoneInvalid => "Номер телефона некорректен",
        MessageKey::PlaceTypeRequired => "Тип помещения обязателен",
        MessageKey::AreaMinRequired => "Минимальная площадь обязательна",
        MessageKey::AreaMinInvalid => "Площадь должна быть валидной",
        MessageKey::AreaMinNegative => "Минимальная площадь не может быть отрицательной",
        MessageKey::AreaMinExceedsMax => {
            "Минимальная площадь не может превышать максимальную площадь"
        }
        MessageKey::AreaMaxRequired => "Максимальная площадь обязательна",
        MessageKey::AreaMaxInvalid => "Площадь должна быть валидной",
        MessageKey::AreaMaxBelowMin => {
            "Максимальная площадь должна быть больше или равна минимальной"
        }
        MessageKey::AreaMaxNotPositive => "Максимальная площадь должна быть положительной",
        MessageKey::DateMinRequired => "Дата начала аренды обязательна",
        MessageKey::DateMinInvalid => "Дата начала аренды должна быть валидной",
        MessageKey::DateMaxRequired => "Дата окончания аренды обязательна",
        MessageKey::DateMaxInvalid => "Дата окончания аренды должна быть валидной",
        MessageKey::DateMaxNotLater => "Дата окончания должна быть позже даты начала",
    }
}

pub(super) fn label(key: LabelKey) -> &'static str {
    match key {
        LabelKey::PopupTitle => "Заполните заявку, чтобы стать резидентом",
        LabelKey::FieldTitle => "Наименование организации / ИП",
        LabelKey::FieldPhone => "Контактный телефон",
        LabelKey::FieldPlaceType => "Тип помещения",
        LabelKey::FieldAddress => "Адрес",
        LabelKey::FieldArea => "Площадь помещения (м2)",
        LabelKey::FieldDate => "Дата начала аренды",
        LabelKey::NumberFrom => "от",
        LabelKey::NumberTo => "до",
        LabelKey::DateFrom => "с",
        LabelKey::DateTo => "по",
        LabelKey::SubmitButton => "Отправить",
    }
}
