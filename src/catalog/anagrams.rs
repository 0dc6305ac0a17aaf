//! The anagram clue data set.
//!
//! Every record of the anagram family, in catalog order. Lookups rely on
//! this order as the deterministic tie break, so new records go at the
//! position the game introduced them, not alphabetically.

use crate::clue::{ClueRecord, WorldPoint};
use crate::state::{GameState, Quest, QuestState, StateError};

use super::ids::{item, object, varbit};

pub(crate) fn records() -> Vec<ClueRecord> {
    vec![
        ClueRecord::builder()
            .item(item::MEDIUM_A_BAKER)
            .text("A BAKER")
            .npc("Baraek")
            .location(3217, 3434, 0)
            .area("Varrock square")
            .question("How many stalls are there in Varrock Square?")
            .answer("5")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_A_BASIC_ANTI_POT)
            .text("A BASIC ANTI POT")
            .npc("Captain Tobias")
            .location(3026, 3216, 0)
            .area("Port Sarim")
            .question("How many ships are there docked at Port Sarim currently?")
            .answer("6")
            .build(),
        ClueRecord::builder()
            .text("A ELF KNOWS")
            .npc("Snowflake")
            .location(2872, 3934, 0)
            .area("Weiss")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_A_HEART)
            .text("A HEART")
            .npc("Aretha")
            .location(1814, 3851, 0)
            .area("Soul altar")
            .question("32 - 5x = 22, what is x?")
            .answer("2")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_AHA_JAR)
            .text("AHA JAR")
            .npc("Jaraah")
            .location(3359, 3276, 0)
            .area("Emir's Arena hospital")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_ARC_O_LINE)
            .text("ARC O LINE")
            .npc("Caroline")
            .location(2715, 3302, 0)
            .area("North Witchaven next to the row boat")
            .question("How many fishermen are there on the fishing platform?")
            .answer("11")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_ARE_COL)
            .text("ARE COL")
            .npc("Oracle")
            .location(3013, 3501, 0)
            .area("Ice Mountain West of Edgeville")
            .question("If x is 15 and y is 3 what is 3x + y?")
            .answer("48")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_ARMCHAIR_THE_PELT)
            .text("ARMCHAIR THE PELT")
            .npc("Charlie the Tramp")
            .location(3209, 3392, 0)
            .area("South entrance of Varrock")
            .question("How many coins would I have if I have 0 coins and attempt to buy 10 loaves of bread for 3 coins each?")
            .answer("0")
            .build(),
        ClueRecord::builder()
            .item(item::ELITE_AT_HERG)
            .text("AT HERG")
            .npc("Regath")
            .location(1719, 3723, 0)
            .area("General Store, Arceuus, Zeah")
            .question("What is -5 to the power of 2?")
            .answer("25")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_A_BAS)
            .text("A BAS")
            .npc("Saba")
            .location(2858, 3577, 0)
            .area("Death Plateau")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_AREA_CHEF_TREK)
            .text("AREA CHEF TREK")
            .npc("Father Aereck")
            .location(3243, 3208, 0)
            .area("Lumbridge Church")
            .question("How many gravestones are in the church graveyard?")
            .answer_fn(lumbridge_gravestone_count)
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_BAIL_TRIMS)
            .text("BAIL TRIMS")
            .npc("Brimstail")
            .location(2402, 3419, 0)
            .area("West of Stronghold Slayer Cave")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_BAKER_CLIMB)
            .text("BAKER CLIMB")
            .npc("Brambickle")
            .location(2783, 3861, 0)
            .area("Trollweiss mountain")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_BLUE_GRIM_GUIDED)
            .text("BLUE GRIM GUIDED")
            .npc("Lumbridge Guide")
            .location(3238, 3220, 0)
            .area("Lumbridge")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_BY_LOOK)
            .text("BY LOOK")
            .npc("Bolkoy")
            .location(2526, 3162, 0)
            .area("Tree Gnome Village general store")
            .question("How many flowers are there in the clearing below this platform?")
            .answer("13")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_CALAMARI_MADE_MUD)
            .text("CALAMARI MADE MUD")
            .npc("Madame Caldarium")
            .location(2553, 2868, 0)
            .area("Corsair Cove")
            .question("What is 3(5-3)?")
            .answer("6")
            .build(),
        ClueRecord::builder()
            .text("CAR IF ICES")
            .npc("Sacrifice")
            .location(2209, 3056, 0)
            .area("Zul-Andra")
            .build(),
        ClueRecord::builder()
            .item(item::ELITE_CAREER_IN_MOON)
            .text("CAREER IN MOON")
            .npc("Oneiromancer")
            .location(2150, 3866, 0)
            .area("Astral altar")
            .question("How many Suqah inhabit Lunar isle?")
            .answer("25")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_CLASH_ION)
            .text("CLASH ION")
            .npc("Nicholas")
            .location(1841, 3803, 0)
            .area("North of Port Piscarilius fishing shop")
            .question("How many windows are in Tynan's shop?")
            .answer("4")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_C_ON_GAME_HOC)
            .text("C ON GAME HOC")
            .npc("Gnome Coach")
            .location(2395, 3486, 0)
            .area("Gnome Ball course")
            .question("How many gnomes on the Gnome ball field have red patches on their uniforms?")
            .answer("6")
            .build(),
        ClueRecord::builder()
            .item(item::ELITE_COOL_NERD)
            .text("COOL NERD")
            .npc("Old crone")
            .location(3462, 3557, 0)
            .area("East of the Slayer Tower")
            .question("What is the combined combat level of each species that live in Slayer tower?")
            .answer("619")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_COPPER_ORE_CRYPTS)
            .text("COPPER ORE CRYPTS")
            .npc("Prospector Percy")
            .location(3061, 3377, 0)
            .area("Motherlode Mine")
            .question("During a party, everyone shook hands with everybody else. There were 66 handshakes. How many people were at the party?")
            .answer("12")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_DARN_DRAKE)
            .text("DARN DRAKE")
            .npc("Daer Krand")
            .location(3728, 3302, 0)
            .area("Sisterhood Sanctuary (Slepe Dungeon, northeast of Nightmare Arena)")
            .build(),
        ClueRecord::builder()
            .text("DED WAR")
            .npc("Edward")
            .location(3284, 3943, 0)
            .area("Inside Rogue's Castle")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_DEKAGRAM)
            .text("DEKAGRAM")
            .npc("Dark Mage")
            .location(3039, 4834, 0)
            .area("Centre of the Abyss")
            .question("How many rifts are found here in the abyss?")
            .answer("13")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_DO_SAY_MORE)
            .text("DO SAY MORE")
            .npc("Doomsayer")
            .location(3230, 3230, 0)
            .area("East of Lumbridge Castle")
            .question("What is 40 divided by 1/2 plus 15?")
            .answer("95")
            .build(),
        ClueRecord::builder()
            .text("DIM THARN")
            .npc("Mandrith")
            .location(3182, 3946, 0)
            .area("Wilderness Resource Area")
            .build(),
        ClueRecord::builder()
            .item(item::ELITE_DR_HITMAN)
            .text("DR HITMAN")
            .npc("Mandrith")
            .location(3182, 3946, 0)
            .area("Wilderness Resource Area")
            .question("How many scorpions live under the pit?")
            .answer("28")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_DR_WARDEN_FUNK)
            .text("DR WARDEN FUNK")
            .npc("Drunken Dwarf")
            .location(2913, 10221, 0)
            .area("East Side of Keldagrim")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_DRAGONS_LAMENT)
            .text("DRAGONS LAMENT")
            .npc("Strange Old Man")
            .location(3564, 3288, 0)
            .area("Barrows")
            .question("One pipe fills a barrel in 1 hour while another pipe can fill the same barrel in 2 hours. How many minutes will it take to fill the tank if both pipes are used?")
            .answer("40")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_DT_RUN_B)
            .text("DT RUN B")
            .npc("Brundt the Chieftain")
            .location(2658, 3670, 0)
            .area("Rellekka, main hall")
            .question("How many people are waiting for the next bard to perform?")
            .answer("4")
            .build(),
        ClueRecord::builder()
            .text("DUO PLUG")
            .npc("Dugopul")
            .location(2803, 2744, 0)
            .area("Graveyard on Ape Atoll")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_EEK_ZERO_OP)
            .text("EEK ZERO OP")
            .npc("Zoo keeper")
            .location(2613, 3269, 0)
            .area("Ardougne Zoo")
            .question("How many animals in total are there in the zoo?")
            .answer_fn(ardougne_zoo_animal_count)
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_EL_OW)
            .text("EL OW")
            .npc("Lowe")
            .location(3233, 3423, 0)
            .area("Varrock archery store")
            .build(),
        ClueRecord::builder()
            .text("FORLUN")
            .npc("Runolf")
            .location(2512, 10256, 0)
            .area("Miscellania & Etceteria Dungeon")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_GOBLIN_KERN)
            .text("GOBLIN KERN")
            .npc("King Bolren")
            .location(2541, 3170, 0)
            .area("Tree Gnome Village")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_GOT_A_BOY)
            .text("GOT A BOY")
            .npc("Gabooty")
            .location(2790, 3066, 0)
            .area("Centre of Tai Bwo Wannai")
            .question("How many buildings are in the village?")
            .answer("11")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_GOBLETS_ODD_TOES)
            .text("GOBLETS ODD TOES")
            .npc("Otto Godblessed")
            .location(2501, 3487, 0)
            .area("Otto's Grotto")
            .question("How many types of dragon are there beneath the whirlpool's cavern?")
            .answer("2")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_HALT_US)
            .text("HALT US")
            .npc("Luthas")
            .location(2938, 3152, 0)
            .area("Banana plantation, Karamja")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_HEORIC)
            .text("HEORIC")
            .npc("Eohric")
            .location(2897, 3565, 0)
            .area("Top floor of Burthorpe Castle")
            .question("King Arthur and Merlin sit down at the Round Table with 8 knights. How many degrees does each get?")
            .answer("36")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_HIS_PHOR)
            .text("HIS PHOR")
            .npc("Horphis")
            .location(1639, 3812, 0)
            .area("Arceuus Library, Zeah")
            .question("On a scale of 1-10, how helpful is Logosia?")
            .answer("1")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_I_AM_SIR)
            .text("I AM SIR")
            .npc("Marisi")
            .location(1737, 3557, 0)
            .area("Allotment patch, South of Hosidius chapel")
            .question("How many cities form the Kingdom of Great Kourend?")
            .answer("5")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_ICY_FE)
            .text("ICY FE")
            .npc("Fycie")
            .location(2630, 2997, 0)
            .area("East Feldip Hills")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_I_DOOM_ICON_INN)
            .text("I DOOM ICON INN")
            .npc("Dominic Onion")
            .location(2609, 3116, 0)
            .area("Nightmare Zone")
            .question("How many reward points does a herb box cost?")
            .answer("9,500")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_SLAYER_MASTER)
            .text_fn(slayer_master_text)
            .npc_fn(slayer_master_npc)
            .location(2432, 3422, 0)
            .area("The slayer master in Gnome Stronghold")
            .question("How many farming patches are there in Gnome stronghold?")
            .answer("2")
            .build(),
        ClueRecord::builder()
            .text("IM N ZEZIM")
            .npc("Immenizz")
            .location(2592, 4324, 0)
            .area("The Imp inside Puro-Puro")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_KAY_SIR)
            .text("KAY SIR")
            .npc("Sir Kay")
            .location(2760, 3496, 0)
            .area("The courtyard in Camelot Castle")
            .question("How many fountains are there within the grounds of Camelot castle?")
            .answer("6")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_LEAKEY)
            .text("LEAKEY")
            .npc("Kaylee")
            .location(2957, 3370, 0)
            .area("Rising Sun Inn in Falador")
            .question("How many chairs are there in the Rising Sun?")
            .answer("18")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_LARK_IN_DOG)
            .text("LARK IN DOG")
            .npc("King Roald")
            .location(3220, 3476, 0)
            .area("Ground floor of Varrock castle")
            .question("How many bookcases are there in the palace library?")
            .answer("24")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_LOW_LAG)
            .text("LOW LAG")
            .npc("Gallow")
            .location(1805, 3566, 0)
            .area("Vinery southeast of Hosidius")
            .question("How many vine patches can you find in this vinery?")
            .answer("12")
            .build(),
        ClueRecord::builder()
            .item(item::ELITE_LADDER_MEMO_GUV)
            .text("LADDER MEMO GUV")
            .npc("Guard Vemmeldo")
            .location(2447, 3418, 1)
            .area("Gnome Stronghold Bank")
            .question("How many magic trees can you find inside the Gnome Stronghold?")
            .answer("3")
            .build(),
        ClueRecord::builder()
            .text("MAL IN TAU")
            .npc("Luminata")
            .location(3508, 3237, 0)
            .area("Near Burgh de Rott entrance")
            .build(),
        ClueRecord::builder()
            .item(item::ELITE_MACHETE_CLAM)
            .text("MACHETE CLAM")
            .npc("Cam the Camel")
            .location(3300, 3231, 0)
            .area("Outside Emir's Arena")
            .question("How many items can carry water in Gielinor?")
            .answer("6")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_ME_IF)
            .text("ME IF")
            .npc("Femi")
            .location(2461, 3382, 0)
            .area("Gates of Tree Gnome Stronghold")
            .build(),
        ClueRecord::builder()
            .text("MOLD LA RAN")
            .npc("Old Man Ral")
            .location(3602, 3209, 0)
            .area("Meiyerditch")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_MOTHERBOARD)
            .text("MOTHERBOARD")
            .npc("Brother Omad")
            .location(2606, 3211, 0)
            .area("Monastery south of Ardougne")
            .question("What is the next number? 12, 13, 15, 17, 111, 113, 117, 119, 123....?")
            .answer("129")
            .build(),
        ClueRecord::builder()
            .text("MUS KIL READER")
            .npc("Radimus Erkle")
            .location(2726, 3368, 0)
            .area("Legends' Guild")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_MY_MANGLE_LAL)
            .text("MY MANGLE LAL")
            .npc("Lammy Langle")
            .location(1688, 3540, 0)
            .area("Hosidius spirit tree patch")
            .build(),
        ClueRecord::builder()
            .item(item::ELITE_NO_OWNER)
            .text("NO OWNER")
            .npc("Oronwen")
            .location(2326, 3178, 0)
            .area("Lletya Seamstress shop in Lletya")
            .question("What is the minimum amount of quest points required to reach Lletya?")
            .answer("20")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_NOD_MED)
            .text("NOD MED")
            .npc("Edmond")
            .location(2566, 3332, 0)
            .area("Behind the most NW house in East Ardougne")
            .question("How many pigeon cages are there around the back of Jerico's house?")
            .answer("3")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_O_BIRDZ_A_ZANY_EN_PC)
            .text("O BIRDZ A ZANY EN PC")
            .npc("Cap'n Izzy No-Beard")
            .location(2807, 3191, 0)
            .area("Brimhaven Agility Arena")
            .question("How many Banana Trees are there in the plantation?")
            .answer("33")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_OK_CO)
            .text("OK CO")
            .npc("Cook")
            .location(3207, 3214, 0)
            .area("Ground floor of Lumbridge Castle")
            .question("How many cannons does Lumbridge Castle have?")
            .answer("9")
            .build(),
        ClueRecord::builder()
            .item(item::ELITE_OUR_OWN_NEEDS)
            .text("OUR OWN NEEDS")
            .npc("Nurse Wooned")
            .location(1511, 3619, 0)
            .area("Shayzien Infirmary")
            .question("How many wounded soldiers are there in the camp?")
            .answer("16")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_PACINNG_A_TAIE)
            .text("PACINNG A TAIE")
            .npc("Captain Ginea")
            .location(1504, 3632, 0)
            .area("Tent east of Shayzien Encampment war tent")
            .question("1 soldier can deal with 6 lizardmen. How many soldiers do we need for an army of 678 lizardmen?")
            .answer("113")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_PEAK_REFLEX)
            .text("PEAK REFLEX")
            .npc("Flax keeper")
            .location(2744, 3444, 0)
            .area("Flax field south of Seers Village")
            .question("If I have 1014 flax, and I spin a third of them into bowstring, how many flax do I have left?")
            .answer("676")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_PEATY_PERT)
            .text("PEATY PERT")
            .npc("Party Pete")
            .location(3047, 3376, 0)
            .area("Falador Party Room")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_QUIT_HORRIBLE_TYRANT)
            .text("QUIT HORRIBLE TYRANT")
            .npc("Brother Tranquility")
            .location(3681, 2963, 0)
            .area("Mos Le'Harmless or Harmony Island")
            .question("If I have 49 bottles of rum to share between 7 pirates, how many would each pirate get?")
            .answer("7")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_QUE_SIR)
            .text("QUE SIR")
            .npc("Squire")
            .location(2975, 3343, 0)
            .area("Falador Castle Courtyard")
            .question("White Knights of Falador are stronger than the Black Knights of the Kinshra. 2 White Knights can handle 3 Kinshra. How many White Knights would we need against an army of 981 Kinshra?")
            .answer("654")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_R_AK_MI)
            .text("R AK MI")
            .npc("Karim")
            .location(3273, 3181, 0)
            .area("Al Kharid Kebab shop")
            .question("I have 16 kebabs, I eat one myself and then share the rest equally between 3 friends. How many do they have each?")
            .answer("5")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_RAT_MAT_WITHIN)
            .text("RAT MAT WITHIN")
            .npc("Martin Thwait")
            .location(2906, 3537, 0)
            .area("Rogues' Den")
            .question("How many natural fires burn in Rogue's Den?")
            .answer("2")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_RATAI)
            .text("RATAI")
            .npc("Taria")
            .location(2940, 3223, 0)
            .area("Rimmington bush patch")
            .question("How many buildings are there in Rimmington?")
            .answer("7")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_R_SLICER)
            .text("R SLICER")
            .npc("Clerris")
            .location(1761, 3850, 0)
            .area("Arceuus mine, Zeah")
            .question("If I have 1,000 blood runes, and cast 131 ice barrage spells, how many blood runes do I have left?")
            .answer("738")
            .build(),
        ClueRecord::builder()
            .text("RIP MAUL")
            .npc("Primula")
            .location(2454, 2853, 1)
            .area("Myth's Guild, first floor")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_SAND_NUT)
            .text("SAND NUT")
            .npc("Dunstan")
            .location(2919, 3574, 0)
            .area("Anvil in north east Burthorpe")
            .question("How much smithing experience does one receive for smelting a blurite bar?")
            .answer("8")
            .build(),
        ClueRecord::builder()
            .text("SLAM DUSTER GRAIL")
            .npc("Guildmaster Lars")
            .location(1649, 3498, 0)
            .area("Woodcutting guild, Zeah")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_SLIDE_WOMAN)
            .text("SLIDE WOMAN")
            .npc("Wise Old Man")
            .location(3088, 3253, 0)
            .area("Draynor Village")
            .question("How many bookcases are in the Wise Old Man's house?")
            .answer("28")
            .build(),
        ClueRecord::builder()
            .item(item::ELITE_SNAKES_SO_I_SAIL)
            .text("SNAKES SO I SAIL")
            .npc("Lisse Isaakson")
            .location(2351, 3801, 0)
            .area("Neitiznot")
            .question("How many arctic logs are required to make a large fremennik round shield?")
            .answer("2")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_TAMED_ROCKS)
            .text("TAMED ROCKS")
            .npc("Dockmaster")
            .location(1822, 3739, 0)
            .area("Port Piscarilius, NE of General store")
            .question("What is the cube root of 125?")
            .answer("5")
            .build(),
        ClueRecord::builder()
            .text("TEN WIGS ON")
            .npc("Wingstone")
            .location(3389, 2877, 0)
            .area("Between Nardah & Agility Pyramid")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_THICKNO)
            .text("THICKNO")
            .npc("Hickton")
            .location(2822, 3442, 0)
            .area("Catherby fletching shop")
            .question("How many ranges are there in Catherby?")
            .answer("2")
            .build(),
        ClueRecord::builder()
            .text("TWENTY CURE IRON")
            .npc("New Recruit Tony")
            .location(1503, 3553, 0)
            .area("Shayzien Graveyard")
            .build(),
        ClueRecord::builder()
            .item(item::ELITE_UNLEASH_NIGHT_MIST)
            .text("UNLEASH NIGHT MIST")
            .npc("Sigli the Huntsman")
            .location(2660, 3654, 0)
            .area("Rellekka")
            .question("What is the combined slayer requirement of every monster in the slayer cave?")
            .answer("302")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_VEIL_VEDA)
            .text("VEIL VEDA")
            .npc("Evil Dave")
            .location(3079, 9892, 0)
            .area("Doris' basement, Edgeville")
            .question("What is 333 multiplied by 2?")
            .answer("666")
            .build(),
        ClueRecord::builder()
            .item(item::HARD_WOO_AN_EGG_KIWI)
            .text("WOO AN EGG KIWI")
            .npc("Awowogei")
            .object(object::APE_ATOLL_THRONE)
            .location(2802, 2765, 0)
            .area("Ape Atoll")
            .question("If I have 303 bananas, and share them between 31 friends evenly, only handing out full bananas. How many will I have left over?")
            .answer("24")
            .build(),
        ClueRecord::builder()
            .item(item::ELITE_MAJORS_LAVA_BADS_AIR)
            .text("MAJORS LAVA BADS AIR")
            .npc("Ambassador Alvijar")
            .location(2736, 5351, 1)
            .area("Dorgesh-Kaan, NE Middle Level")
            .question("Double the miles before the initial Dorgeshuun veteran.")
            .answer("2505")
            .build(),
        ClueRecord::builder()
            .text("AN EARL")
            .npc("Ranael")
            .location(3315, 3163, 0)
            .area("Al Kharid skirt shop")
            .build(),
        ClueRecord::builder()
            .text("CARPET AHOY")
            .npc("Apothecary")
            .location(3195, 3404, 0)
            .area("Southwest Varrock")
            .build(),
        ClueRecord::builder()
            .text("CHAR GAME DISORDER")
            .npc("Archmage Sedridor")
            .location(3102, 9570, 0)
            .area("Wizards' Tower basement")
            .build(),
        ClueRecord::builder()
            .text("I CORD")
            .npc("Doric")
            .location(2951, 3450, 0)
            .area("North of Falador")
            .build(),
        ClueRecord::builder()
            .text("IN BAR")
            .npc("Brian")
            .location(3026, 3246, 0)
            .area("Port Sarim battleaxe shop")
            .build(),
        ClueRecord::builder()
            .text("RAIN COVE")
            .npc("Veronica")
            .location(3110, 3330, 0)
            .area("Outside Draynor Manor")
            .build(),
        ClueRecord::builder()
            .text("RUG DETER")
            .npc("Gertrude")
            .location(3151, 3412, 0)
            .area("West of Varrock, south of the Cooks' Guild")
            .build(),
        ClueRecord::builder()
            .text("SIR SHARE RED")
            .npc("Hairdresser")
            .location(2944, 3381, 0)
            .area("Western Falador")
            .build(),
        ClueRecord::builder()
            .text("TAUNT ROOF")
            .npc("Fortunato")
            .location(3080, 3250, 0)
            .area("Draynor Village Market")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_HICK_JET)
            .text("HICK JET")
            .npc("Jethick")
            .location(2541, 3305, 0)
            .area("West Ardougne")
            .question("How many graves are there in the city graveyard?")
            .answer("38")
            .build(),
        ClueRecord::builder()
            .text("RUE GO")
            .npc("Goreu")
            .location(2335, 3162, 0)
            .area("Lletya")
            .build(),
        ClueRecord::builder()
            .text("BRUCIE CATNAP")
            .npc("Captain Bruce")
            .location(1529, 3567, 0)
            .area("East of Shayzien Graveyard")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_UESNKRL_NRIEDDO)
            .text("UESNKRL NRIEDDO")
            .npc("Drunken soldier")
            .location(1551, 3565, 0)
            .area("Shayzien pub")
            .question("If 13 Shayzien Soldiers kill 46 Lizardmen each in a day, how many Lizardmen have they killed in total in a single day?")
            .answer("598")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_LAME_T)
            .text("LAME T")
            .npc("Metla")
            .location(1742, 2977, 0)
            .area("Stonecutter Outpost")
            .build(),
        ClueRecord::builder()
            .item(item::ELITE_CIRR_JAD)
            .text("CIRR JAD")
            .npc("Jardric")
            .location_fn(fossil_island_camp)
            .area("Fossil Island")
            .question("What is 3 to the power of 0?")
            .answer("1")
            .build(),
        ClueRecord::builder()
            .item(item::MEDIUM_CUTE_HI)
            .text("CUTE HI")
            .npc("Teicuh")
            .location(1212, 3119, 0)
            .area("Tal Teklan")
            .question("If a death rune costs 220 coins, an air rune costs 3 coins, and a water rune costs 4 coins, how many coins do I need to cast Water Blast 17 times?")
            .answer("4097")
            .build(),
    ]
}

fn slayer_master_text(state: &dyn GameState) -> Result<&'static str, StateError> {
    Ok(if state.varbit(varbit::GNOME_SLAYER_MASTER)? == 0 {
        "I EVEN"
    } else {
        "VESTE"
    })
}

fn slayer_master_npc(state: &dyn GameState) -> Result<&'static str, StateError> {
    Ok(if state.varbit(varbit::GNOME_SLAYER_MASTER)? == 0 {
        "Nieve"
    } else {
        "Steve"
    })
}

fn ardougne_zoo_animal_count(state: &dyn GameState) -> Result<&'static str, StateError> {
    Ok(match state.quest_state(Quest::EaglesPeak)? {
        QuestState::Finished => "51",
        _ => "50",
    })
}

fn lumbridge_gravestone_count(state: &dyn GameState) -> Result<&'static str, StateError> {
    Ok(match state.varbit(varbit::JARVIS_GRAVESTONE)? {
        1 => "20",
        _ => "19",
    })
}

fn fossil_island_camp(state: &dyn GameState) -> Result<WorldPoint, StateError> {
    Ok(if state.varbit(varbit::DRAGON_SLAYER_II_PROGRESS)? <= 60 {
        WorldPoint::new(3719, 3810, 0) // Museum camp
    } else {
        WorldPoint::new(3661, 3849, 0) // West side of Fossil Island
    })
}
