use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    #[default]
    PtBr,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::En => "en",
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "pt-br" | "pt_br" => Ok(Locale::PtBr),
            "en" => Ok(Locale::En),
            other => Err(format!(
                "`{other}` is not a supported locale. Use either `pt-BR` or `en`."
            )),
        }
    }
}

/// Caller-facing texts, rendered in the configured locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    SubscriptionCreated,
    SubscriptionUpdated,
    SubscriptionCancelled,
    MalformedRequest,
    InvalidEmail,
    InvalidDaysBeforeNotification,
    InvalidNotificationType,
    InvalidDeliveryStatus,
    InvalidHolidayDate,
    InvalidHolidayName,
    SubscribeFailed,
    UnsubscribeFailed,
    StatusCheckFailed,
    ListActiveFailed,
    NotificationLogFailed,
}

impl Notice {
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::PtBr => self.pt_br(),
            Locale::En => self.en(),
        }
    }

    fn pt_br(self) -> &'static str {
        match self {
            Notice::SubscriptionCreated => "Inscrição realizada com sucesso!",
            Notice::SubscriptionUpdated => "Inscrição atualizada com sucesso!",
            Notice::SubscriptionCancelled => "Inscrição cancelada com sucesso!",
            Notice::MalformedRequest => "Dados da requisição inválidos",
            Notice::InvalidEmail => "E-mail inválido",
            Notice::InvalidDaysBeforeNotification => {
                "A antecedência deve ser um número inteiro de 1 a 30 dias"
            }
            Notice::InvalidNotificationType => "Tipo de notificação inválido",
            Notice::InvalidDeliveryStatus => "Status de envio inválido",
            Notice::InvalidHolidayDate => "Data do feriado muito longa",
            Notice::InvalidHolidayName => "Nome do feriado muito longo",
            Notice::SubscribeFailed => "Erro ao processar inscrição",
            Notice::UnsubscribeFailed => "Erro ao cancelar inscrição",
            Notice::StatusCheckFailed => "Erro ao verificar status",
            Notice::ListActiveFailed => "Erro ao buscar inscrições",
            Notice::NotificationLogFailed => "Erro ao registrar notificação",
        }
    }

    fn en(self) -> &'static str {
        match self {
            Notice::SubscriptionCreated => "Subscription created successfully!",
            Notice::SubscriptionUpdated => "Subscription updated successfully!",
            Notice::SubscriptionCancelled => "Subscription cancelled successfully!",
            Notice::MalformedRequest => "Invalid request data",
            Notice::InvalidEmail => "Invalid email",
            Notice::InvalidDaysBeforeNotification => {
                "Days before notification must be a whole number from 1 to 30"
            }
            Notice::InvalidNotificationType => "Invalid notification type",
            Notice::InvalidDeliveryStatus => "Invalid delivery status",
            Notice::InvalidHolidayDate => "Holiday date is too long",
            Notice::InvalidHolidayName => "Holiday name is too long",
            Notice::SubscribeFailed => "Could not process subscription",
            Notice::UnsubscribeFailed => "Could not cancel subscription",
            Notice::StatusCheckFailed => "Could not check subscription status",
            Notice::ListActiveFailed => "Could not fetch subscriptions",
            Notice::NotificationLogFailed => "Could not record notification",
        }
    }
}
